//! Bulletin endpoint addressing.

/// Host publishing the daily bulletin.
pub const DEFAULT_HOST: &str = "www.cbr.ru";

/// Plain HTTP port.
pub const DEFAULT_PORT: u16 = 80;

/// Path of the daily bulletin. An empty `date_req` asks for the current rates.
pub const DAILY_PATH: &str = "/scripts/XML_daily.asp?date_req=";

/// Location of the daily bulletin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host name or address.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Request path including the query string.
    pub path: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DAILY_PATH.to_string(),
        }
    }
}

impl Endpoint {
    /// Creates an endpoint for the daily bulletin on the given host and port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            path: DAILY_PATH.to_string(),
        }
    }

    /// Builds the request URL.
    ///
    /// The port is omitted when it is the HTTP default.
    ///
    /// # Example
    ///
    /// ```
    /// use kursy_fetch::endpoint::Endpoint;
    ///
    /// assert_eq!(
    ///     Endpoint::default().url(),
    ///     "http://www.cbr.ru/scripts/XML_daily.asp?date_req="
    /// );
    /// ```
    #[must_use]
    pub fn url(&self) -> String {
        if self.port == DEFAULT_PORT {
            format!("http://{}{}", self.host, self.path)
        } else {
            format!("http://{}:{}{}", self.host, self.port, self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(
            Endpoint::default().url(),
            "http://www.cbr.ru/scripts/XML_daily.asp?date_req="
        );
    }

    #[test]
    fn test_custom_port_in_url() {
        let endpoint = Endpoint::new("127.0.0.1", 8080);
        assert_eq!(
            endpoint.url(),
            "http://127.0.0.1:8080/scripts/XML_daily.asp?date_req="
        );
    }

    #[test]
    fn test_date_param_is_empty() {
        assert!(Endpoint::default().url().ends_with("date_req="));
    }
}
