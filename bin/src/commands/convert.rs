//! Convert command implementation.

use crate::display::print_conversion;
use anyhow::Result;
use kursy_lib::prelude::*;

/// Map user input to a publisher code.
///
/// Unresolvable input is passed through unchanged so the converter reports it
/// as an unknown currency.
pub(crate) fn resolve_code(book: &RateBook, query: &str) -> String {
    book.resolve(query)
        .map_or_else(|_| query.trim().to_string(), |r| r.code.clone())
}

/// Convert an amount between two currencies and print the result.
pub(crate) fn convert_amount(book: &RateBook, from: &str, to: &str, amount: f64) -> Result<()> {
    let from = resolve_code(book, from);
    let to = resolve_code(book, to);
    let conversion = convert(book, &from, &to, amount)?;
    print_conversion(book, &conversion);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code() {
        let book = RateBook::new(
            "16.10.2026",
            vec![RateRecord::new("R01235", "US Dollar", 1, 90.0).with_char_code("USD")],
        );
        assert_eq!(resolve_code(&book, "usd"), "R01235");
        assert_eq!(resolve_code(&book, "R01235"), "R01235");
        assert_eq!(resolve_code(&book, " XYZ "), "XYZ");
    }

    #[test]
    fn test_convert_amount_errors() {
        let book = RateBook::new(
            "16.10.2026",
            vec![RateRecord::new("R01235", "US Dollar", 1, 90.0).with_char_code("USD")],
        );
        let err = convert_amount(&book, "USD", "XYZ", 1.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConversionError>(),
            Some(ConversionError::UnknownCurrency { code, .. }) if code == "XYZ"
        ));

        let err = convert_amount(&book, "USD", "USD", -1.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConversionError>(),
            Some(ConversionError::InvalidAmount { .. })
        ));
    }
}
