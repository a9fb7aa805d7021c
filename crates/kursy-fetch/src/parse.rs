//! XML bulletin parsing.
//!
//! The bulletin has the shape:
//!
//! ```xml
//! <ValCurs Date="16.10.2026" name="Foreign Currency Market">
//!   <Valute ID="R01235">
//!     <NumCode>840</NumCode>
//!     <CharCode>USD</CharCode>
//!     <Nominal>1</Nominal>
//!     <Name>Доллар США</Name>
//!     <Value>81,5432</Value>
//!   </Valute>
//! </ValCurs>
//! ```
//!
//! Parsing is all-or-nothing: the first malformed record aborts the parse
//! and nothing from the document is returned.

use kursy_types::{RateBook, RateRecord};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while parsing a bulletin.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document contains no markup.
    #[error("Empty bulletin document")]
    EmptyDocument,

    /// The document is not well-formed or does not match the bulletin layout.
    #[error("Malformed bulletin XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The root element has no `Date` attribute.
    #[error("Bulletin has no Date attribute")]
    MissingDate,

    /// A record lacks a required field.
    #[error("Record #{index} ({id}): missing {field}")]
    MissingField {
        /// Zero-based position of the record in the document.
        index: usize,
        /// The record's `ID` attribute, or `?` if absent.
        id: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A numeric field could not be converted.
    #[error("Record #{index} ({id}): invalid {field} {text:?}")]
    InvalidNumber {
        /// Zero-based position of the record in the document.
        index: usize,
        /// The record's `ID` attribute.
        id: String,
        /// Name of the offending field.
        field: &'static str,
        /// The raw field text.
        text: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawBulletin {
    #[serde(rename = "@Date")]
    date: Option<String>,
    #[serde(rename = "Valute", default)]
    valutes: Vec<RawValute>,
}

#[derive(Debug, Deserialize)]
struct RawValute {
    #[serde(rename = "@ID")]
    id: Option<String>,
    #[serde(rename = "NumCode")]
    num_code: Option<String>,
    #[serde(rename = "CharCode")]
    char_code: Option<String>,
    #[serde(rename = "Nominal")]
    nominal: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Value")]
    value: Option<String>,
}

/// Parses decoded bulletin text into a [`RateBook`].
///
/// Records keep their document order. Values use a comma as the decimal
/// separator in the source and are normalized before conversion.
///
/// # Errors
///
/// Returns an error if the document is malformed, the date is missing, or
/// any record lacks a field or carries a non-numeric nominal or value.
///
/// # Example
///
/// ```
/// use kursy_fetch::parse_bulletin;
///
/// let xml = r#"<ValCurs Date="16.10.2026">
///     <Valute ID="R01235"><Nominal>1</Nominal><Name>Dollar</Name><Value>81,5</Value></Valute>
/// </ValCurs>"#;
/// let book = parse_bulletin(xml).unwrap();
/// assert_eq!(book.date(), "16.10.2026");
/// assert_eq!(book.list_all()[0].value, 81.5);
/// ```
pub fn parse_bulletin(text: &str) -> Result<RateBook, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let raw: RawBulletin = quick_xml::de::from_str(text)?;
    let date = raw.date.ok_or(ParseError::MissingDate)?;

    let records = raw
        .valutes
        .into_iter()
        .enumerate()
        .map(|(index, valute)| convert_record(index, valute))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(date = %date, records = records.len(), "parsed bulletin");
    Ok(RateBook::new(date, records))
}

fn convert_record(index: usize, raw: RawValute) -> Result<RateRecord, ParseError> {
    let missing = |id: &str, field| ParseError::MissingField {
        index,
        id: id.to_string(),
        field,
    };

    let id = raw.id.ok_or_else(|| missing("?", "ID"))?;
    let name = raw.name.ok_or_else(|| missing(&id, "Name"))?;
    let nominal_text = raw.nominal.ok_or_else(|| missing(&id, "Nominal"))?;
    let value_text = raw.value.ok_or_else(|| missing(&id, "Value"))?;

    let invalid = |field, text: &str| ParseError::InvalidNumber {
        index,
        id: id.clone(),
        field,
        text: text.to_string(),
    };

    let nominal = nominal_text
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid("Nominal", &nominal_text))?;
    let value = parse_value(&value_text).ok_or_else(|| invalid("Value", &value_text))?;

    Ok(RateRecord {
        code: id,
        name: name.trim().to_string(),
        nominal,
        value,
        num_code: raw.num_code.map(|c| c.trim().to_string()),
        char_code: raw.char_code.map(|c| c.trim().to_string()),
    })
}

/// Parses a quote value, accepting a comma as the decimal separator.
///
/// Returns `None` for non-numeric or non-finite input.
#[must_use]
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
