//! Error types for kursy.

use thiserror::Error;

/// Result type alias for kursy operations.
pub type Result<T> = std::result::Result<T, KursyError>;

/// Errors that can occur while loading a bulletin.
///
/// Library crates further down the pipeline convert their own error types
/// into this one so callers can handle a failed load uniformly.
#[derive(Error, Debug)]
pub enum KursyError {
    /// The bulletin could not be retrieved.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The bulletin was retrieved but could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A currency lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors returned by [`RateBook`](crate::RateBook) lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No record with the requested code exists in the book.
    #[error("Currency not found: {code}")]
    NotFound {
        /// The code that was looked up.
        code: String,
    },

    /// The record exists but quotes a zero nominal, so no per-unit rate exists.
    #[error("Currency {code} has a zero nominal")]
    ZeroNominal {
        /// The code of the offending record.
        code: String,
    },

    /// The record quotes a zero or negative value.
    #[error("Currency {code} has a non-positive value")]
    NonPositiveValue {
        /// The code of the offending record.
        code: String,
    },
}

impl LookupError {
    /// Returns the code that caused the failure.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { code }
            | Self::ZeroNominal { code }
            | Self::NonPositiveValue { code } => code,
        }
    }
}
