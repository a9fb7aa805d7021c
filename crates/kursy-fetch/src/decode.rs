//! Prologue-driven text decoding for bulletin payloads.

use encoding_rs::{Encoding, UTF_8};
use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

/// Errors that can occur while decoding a bulletin body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body was empty.
    #[error("Empty response body")]
    EmptyInput,

    /// The XML prologue could not be read.
    #[error("Malformed XML prologue: {0}")]
    Prologue(#[from] quick_xml::Error),

    /// The prologue declares an encoding that is not recognized.
    #[error("Unsupported encoding: {0}")]
    UnknownEncoding(String),

    /// The body contains byte sequences invalid in the declared encoding.
    #[error("Body is not valid {0}")]
    Malformed(&'static str),
}

/// Returns the encoding declared in the XML prologue, defaulting to UTF-8.
///
/// The prologue is always ASCII, so it can be read before the rest of the
/// document is decoded.
///
/// # Errors
///
/// Returns an error if the prologue is malformed or names an unknown encoding.
pub fn declared_encoding(body: &[u8]) -> Result<&'static Encoding, DecodeError> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Decl(decl) => {
                let Some(label) = decl.encoding() else {
                    return Ok(UTF_8);
                };
                let label = label.map_err(quick_xml::Error::from)?;
                return Encoding::for_label(label.trim_ascii()).ok_or_else(|| {
                    DecodeError::UnknownEncoding(String::from_utf8_lossy(&label).into_owned())
                });
            }
            // The declaration may only be preceded by whitespace or a BOM.
            Event::Text(_) => {}
            _ => return Ok(UTF_8),
        }
        buf.clear();
    }
}

/// Decodes a bulletin body into text using its declared encoding.
///
/// A byte order mark, if present, overrides the declaration.
///
/// # Errors
///
/// Returns an error if the body is empty, the prologue is malformed, the
/// encoding is unknown, or the bytes are invalid for that encoding.
///
/// # Example
///
/// ```
/// use kursy_fetch::decode_bulletin;
///
/// let body = b"<?xml version=\"1.0\" encoding=\"windows-1251\"?><ValCurs Date=\"01.01.2026\">\xc4</ValCurs>";
/// let text = decode_bulletin(body).unwrap();
/// assert!(text.contains('Д'));
/// ```
pub fn decode_bulletin(body: &[u8]) -> Result<String, DecodeError> {
    if body.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let encoding = declared_encoding(body)?;
    let (text, actual, had_errors) = encoding.decode(body);
    if had_errors {
        return Err(DecodeError::Malformed(actual.name()));
    }

    tracing::debug!(encoding = actual.name(), bytes = body.len(), "decoded bulletin body");
    Ok(text.into_owned())
}
