//! HTTP client for retrieving the daily bulletin.

use bytes::Bytes;
use kursy_types::{KursyError, RateBook};
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use thiserror::Error;

use crate::{DecodeError, ParseError, decode_bulletin, endpoint::Endpoint, parse_bulletin};

/// Configuration for the bulletin client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where the bulletin is published.
    pub endpoint: Endpoint,
    /// Request timeout. `None` leaves it to the platform.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            timeout: None,
            user_agent: format!("kursy/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching the bulletin.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, resolution, write or read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body could not be decoded to text.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<FetchError> for KursyError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err.to_string())
    }
}

impl From<ParseError> for KursyError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Single-shot HTTP client for the daily bulletin.
///
/// Every call makes exactly one request with no retries. Idle connections
/// are not pooled, so the socket is released when the call returns.
#[derive(Debug, Clone)]
pub struct BulletinClient {
    client: Client,
    config: ClientConfig,
}

impl BulletinClient {
    /// Creates a new bulletin client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .http1_only()
            .pool_max_idle_per_host(0)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the raw bulletin bytes.
    ///
    /// # Errors
    ///
    /// Returns an error on any network failure or a non-success status.
    pub async fn fetch_raw(&self) -> Result<Bytes, FetchError> {
        let url = self.config.endpoint.url();
        tracing::debug!(%url, "requesting bulletin");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "bulletin request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "received bulletin");
        Ok(body)
    }

    /// Downloads the bulletin and decodes it to text.
    ///
    /// # Errors
    ///
    /// Returns an error on any network failure, a non-success status, or a
    /// body that cannot be decoded in its declared encoding.
    pub async fn fetch_bulletin(&self) -> Result<String, FetchError> {
        let body = self.fetch_raw().await?;
        Ok(decode_bulletin(&body)?)
    }

    /// Fetches and parses the bulletin into a [`RateBook`].
    ///
    /// The book is only constructed once the whole document has parsed.
    ///
    /// # Errors
    ///
    /// Returns [`KursyError::Fetch`] or [`KursyError::Parse`] describing the
    /// stage that failed.
    pub async fn load(&self) -> Result<RateBook, KursyError> {
        let text = self.fetch_bulletin().await.inspect_err(|e| {
            tracing::warn!(error = %e, "failed to fetch bulletin");
        })?;
        let book = parse_bulletin(&text).inspect_err(|e| {
            tracing::warn!(error = %e, "failed to parse bulletin");
        })?;
        tracing::info!(date = book.date(), records = book.len(), "loaded bulletin");
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const BULLETIN: &str = "<?xml version=\"1.0\" encoding=\"windows-1251\"?>\
<ValCurs Date=\"16.10.2026\" name=\"Foreign Currency Market\">\
<Valute ID=\"R01235\"><NumCode>840</NumCode><CharCode>USD</CharCode>\
<Nominal>1</Nominal><Name>Доллар США</Name><Value>81,5432</Value></Valute>\
<Valute ID=\"R01239\"><NumCode>978</NumCode><CharCode>EUR</CharCode>\
<Nominal>1</Nominal><Name>Евро</Name><Value>94,1021</Value></Valute>\
</ValCurs>";

    /// Serves one canned response and returns the request head it received.
    async fn serve_once(status_line: &'static str, body: Vec<u8>) -> (u16, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let head = format!(
                "{status_line}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        (port, handle)
    }

    fn local_client(port: u16) -> BulletinClient {
        BulletinClient::new(ClientConfig {
            endpoint: Endpoint::new("127.0.0.1", port),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, Endpoint::default());
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("kursy/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        assert!(BulletinClient::with_defaults().is_ok());
    }

    #[tokio::test]
    async fn test_request_shape() {
        let (body, _, _) = WINDOWS_1251.encode(BULLETIN);
        let (port, server) = serve_once("HTTP/1.1 200 OK", body.into_owned()).await;

        local_client(port).fetch_raw().await.unwrap();

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /scripts/xml_daily.asp?date_req= http/1.1\r\n"));
        assert!(request.contains(&format!("host: 127.0.0.1:{port}\r\n")));
        assert!(request.contains("user-agent: kursy/"));
        assert!(request.contains("accept: application/xml\r\n"));
    }

    #[tokio::test]
    async fn test_fetch_decodes_declared_encoding() {
        let (body, _, _) = WINDOWS_1251.encode(BULLETIN);
        let (port, _server) = serve_once("HTTP/1.1 200 OK", body.into_owned()).await;

        let text = local_client(port).fetch_bulletin().await.unwrap();
        assert!(text.contains("Доллар США"));
    }

    #[tokio::test]
    async fn test_load_builds_book() {
        let (body, _, _) = WINDOWS_1251.encode(BULLETIN);
        let (port, _server) = serve_once("HTTP/1.1 200 OK", body.into_owned()).await;

        let book = local_client(port).load().await.unwrap();
        assert_eq!(book.date(), "16.10.2026");
        assert_eq!(book.len(), 2);
        assert_eq!(book.find_by_code("R01239").unwrap().name, "Евро");
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (port, _server) = serve_once("HTTP/1.1 503 Service Unavailable", Vec::new()).await;

        let result = local_client(port).fetch_raw().await;
        assert!(matches!(result, Err(FetchError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = local_client(port).load().await;
        assert!(matches!(result, Err(KursyError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_load_reports_parse_failure() {
        let body = b"<?xml version=\"1.0\"?><ValCurs></ValCurs>".to_vec();
        let (port, _server) = serve_once("HTTP/1.1 200 OK", body).await;

        let result = local_client(port).load().await;
        assert!(matches!(result, Err(KursyError::Parse(_))));
    }
}
