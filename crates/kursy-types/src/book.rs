//! Immutable collection of quotes from one bulletin.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{LookupError, RateRecord};

/// Date format used by the publisher in the bulletin's `Date` attribute.
pub const BULLETIN_DATE_FORMAT: &str = "%d.%m.%Y";

/// The quotes of one daily bulletin, in document order.
///
/// A book is built once from a complete parse and never mutated afterwards.
/// An empty book stands in for a failed load: every lookup against it
/// returns [`LookupError::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateBook {
    date: String,
    records: Vec<RateRecord>,
}

impl RateBook {
    /// Creates a book from a bulletin date and its records.
    #[must_use]
    pub fn new(date: impl Into<String>, records: Vec<RateRecord>) -> Self {
        Self {
            date: date.into(),
            records,
        }
    }

    /// Creates a book with no date and no records.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            date: String::new(),
            records: Vec::new(),
        }
    }

    /// Returns the bulletin date exactly as published.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parses the bulletin date, returning `None` if it is not in `DD.MM.YYYY` form.
    #[must_use]
    pub fn bulletin_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, BULLETIN_DATE_FORMAT).ok()
    }

    /// Returns all records in document order.
    #[must_use]
    pub fn list_all(&self) -> &[RateRecord] {
        &self.records
    }

    /// Returns an iterator over the records in document order.
    pub fn iter(&self) -> impl Iterator<Item = &RateRecord> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the book holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first record whose publisher code matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no record has this code.
    pub fn find_by_code(&self, code: &str) -> Result<&RateRecord, LookupError> {
        self.records
            .iter()
            .find(|r| r.code == code)
            .ok_or_else(|| LookupError::NotFound {
                code: code.to_string(),
            })
    }

    /// Returns the price of one unit of the currency with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if the code is unknown,
    /// [`LookupError::ZeroNominal`] if the record quotes a zero nominal and
    /// [`LookupError::NonPositiveValue`] if its value is zero or negative.
    pub fn per_unit_rate(&self, code: &str) -> Result<f64, LookupError> {
        let record = self.find_by_code(code)?;
        if record.nominal == 0 {
            return Err(LookupError::ZeroNominal {
                code: record.code.clone(),
            });
        }
        record
            .per_unit_rate()
            .ok_or_else(|| LookupError::NonPositiveValue {
                code: record.code.clone(),
            })
    }

    /// Resolves user input to a record.
    ///
    /// Tries an exact publisher code first, then falls back to the ISO
    /// alphabetic code ignoring ASCII case, so both `R01235` and `usd` work.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if neither form matches.
    pub fn resolve(&self, query: &str) -> Result<&RateRecord, LookupError> {
        let query = query.trim();
        self.find_by_code(query).or_else(|err| {
            self.records
                .iter()
                .find(|r| {
                    r.char_code
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(query))
                })
                .ok_or(err)
        })
    }
}

impl<'a> IntoIterator for &'a RateBook {
    type Item = &'a RateRecord;
    type IntoIter = std::slice::Iter<'a, RateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
