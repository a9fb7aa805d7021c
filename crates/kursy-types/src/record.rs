//! Currency quote representation.

use serde::{Deserialize, Serialize};

/// A single currency quote from a daily bulletin.
///
/// `value` is the price of `nominal` units of the currency in the home
/// currency. Some currencies are quoted per 10, 100 or 10 000 units, so
/// [`RateRecord::per_unit_rate`] should be used for any arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Publisher-assigned identifier (e.g. `R01235`).
    pub code: String,
    /// Human-readable name in the bulletin's language.
    pub name: String,
    /// Unit size the value is quoted for.
    pub nominal: u32,
    /// Price of `nominal` units in the home currency.
    pub value: f64,
    /// ISO 4217 numeric code, when the bulletin provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_code: Option<String>,
    /// ISO 4217 alphabetic code, when the bulletin provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_code: Option<String>,
}

impl RateRecord {
    /// Creates a new record without ISO codes.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, nominal: u32, value: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            nominal,
            value,
            num_code: None,
            char_code: None,
        }
    }

    /// Sets the ISO alphabetic code.
    #[must_use]
    pub fn with_char_code(mut self, char_code: impl Into<String>) -> Self {
        self.char_code = Some(char_code.into());
        self
    }

    /// Sets the ISO numeric code.
    #[must_use]
    pub fn with_num_code(mut self, num_code: impl Into<String>) -> Self {
        self.num_code = Some(num_code.into());
        self
    }

    /// Returns the price of exactly one unit.
    ///
    /// Returns `None` if the nominal is zero or the value is not positive,
    /// since neither can serve as a conversion basis.
    #[must_use]
    pub fn per_unit_rate(&self) -> Option<f64> {
        (self.nominal > 0 && self.value > 0.0).then(|| self.value / f64::from(self.nominal))
    }

    /// Returns the alphabetic code if known, otherwise the publisher code.
    #[must_use]
    pub fn display_code(&self) -> &str {
        self.char_code.as_deref().unwrap_or(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_per_unit_rate_divides_by_nominal() {
        let record = RateRecord::new("R01335", "Тенге", 10, 92.3415);
        assert_relative_eq!(record.per_unit_rate().unwrap(), 9.23415, epsilon = 1e-12);
    }

    #[test]
    fn test_per_unit_rate_zero_nominal() {
        let record = RateRecord::new("R00000", "Broken", 0, 12.0);
        assert_eq!(record.per_unit_rate(), None);
    }

    #[test]
    fn test_per_unit_rate_non_positive_value() {
        assert_eq!(RateRecord::new("R00001", "Zero", 1, 0.0).per_unit_rate(), None);
        assert_eq!(RateRecord::new("R00002", "Negative", 1, -5.0).per_unit_rate(), None);
    }

    #[test]
    fn test_display_code_prefers_char_code() {
        let record = RateRecord::new("R01235", "Доллар США", 1, 81.5);
        assert_eq!(record.display_code(), "R01235");

        let record = record.with_char_code("USD").with_num_code("840");
        assert_eq!(record.display_code(), "USD");
        assert_eq!(record.num_code.as_deref(), Some("840"));
    }

    #[test]
    fn test_serialize_skips_missing_iso_codes() {
        let record = RateRecord::new("R01235", "Dollar", 1, 81.5);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("char_code"));
        assert!(!json.contains("num_code"));
    }
}
