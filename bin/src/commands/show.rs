//! Show command implementation.
//!
//! Looks up a single currency by publisher ID or ISO code.

use crate::display::print_record;
use kursy_lib::prelude::*;

/// Show one currency's quote and per-unit rate.
pub(crate) fn show_rate(book: &RateBook, query: &str) -> Result<()> {
    let record = book.resolve(query)?;
    print_record(record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> RateBook {
        RateBook::new(
            "16.10.2026",
            vec![RateRecord::new("R01235", "US Dollar", 1, 90.0).with_char_code("USD")],
        )
    }

    #[test]
    fn test_show_known_currency() {
        let book = sample_book();
        assert!(show_rate(&book, "R01235").is_ok());
        assert!(show_rate(&book, "usd").is_ok());
    }

    #[test]
    fn test_show_unknown_currency() {
        let err = show_rate(&sample_book(), "ZZZ").unwrap_err();
        assert!(matches!(
            &err,
            KursyError::Lookup(LookupError::NotFound { code }) if code == "ZZZ"
        ));
        assert_eq!(err.to_string(), "Currency not found: ZZZ");
    }
}
