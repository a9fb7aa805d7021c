//! List command implementation.

use crate::display::{Format, print_json, print_table};
use anyhow::Result;
use kursy_lib::prelude::*;

/// List every rate in the bulletin in the requested format.
pub(crate) fn list_rates(book: &RateBook, format: Format) -> Result<()> {
    match format {
        Format::Table => print_table(book),
        Format::Json => print_json(book)?,
    }
    Ok(())
}
