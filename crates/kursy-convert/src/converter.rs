//! Cross-rate conversion.

use kursy_types::{LookupError, RateBook};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// One of the currencies has no usable rate in the book.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The code that could not be resolved.
        code: String,
        /// Why the lookup failed.
        #[source]
        source: LookupError,
    },

    /// The amount is not a positive finite number.
    #[error("Invalid amount: {amount} (must be greater than zero)")]
    InvalidAmount {
        /// The rejected amount.
        amount: f64,
    },
}

impl From<LookupError> for ConversionError {
    fn from(source: LookupError) -> Self {
        Self::UnknownCurrency {
            code: source.code().to_string(),
            source,
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Source currency code.
    pub from: String,
    /// Destination currency code.
    pub to: String,
    /// Amount in the source currency.
    pub amount: f64,
    /// Converted amount in the destination currency.
    pub result: f64,
    /// Price of one unit of `from` expressed in `to`.
    pub cross_rate: f64,
}

/// Converts `amount` units of `from_code` into `to_code`.
///
/// Both per-unit rates are taken from the book in home-currency terms, so
/// `result = amount * rate_from / rate_to`. Converting a currency into
/// itself is allowed and yields a cross-rate of one.
///
/// # Errors
///
/// Returns [`ConversionError::UnknownCurrency`] if either code has no usable
/// rate (unknown, zero nominal or non-positive value), then
/// [`ConversionError::InvalidAmount`] if `amount` is not positive.
///
/// # Example
///
/// ```
/// use kursy_convert::convert;
/// use kursy_types::{RateBook, RateRecord};
///
/// let book = RateBook::new(
///     "16.10.2026",
///     vec![
///         RateRecord::new("R01235", "US Dollar", 1, 90.0),
///         RateRecord::new("R01239", "Euro", 1, 100.0),
///     ],
/// );
/// let conversion = convert(&book, "R01235", "R01239", 50.0).unwrap();
/// assert!((conversion.result - 45.0).abs() < 1e-9);
/// ```
pub fn convert(
    book: &RateBook,
    from_code: &str,
    to_code: &str,
    amount: f64,
) -> Result<Conversion, ConversionError> {
    let rate_from = book.per_unit_rate(from_code)?;
    let rate_to = book.per_unit_rate(to_code)?;

    if !(amount.is_finite() && amount > 0.0) {
        return Err(ConversionError::InvalidAmount { amount });
    }

    let cross_rate = rate_from / rate_to;
    let result = amount * rate_from / rate_to;
    tracing::debug!(from_code, to_code, amount, cross_rate, result, "converted");

    Ok(Conversion {
        from: from_code.to_string(),
        to: to_code.to_string(),
        amount,
        result,
        cross_rate,
    })
}
