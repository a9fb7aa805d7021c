//! Display utilities and output formatting for the kursy CLI.

use anyhow::Result;
use clap::ValueEnum;
use kursy_lib::prelude::*;

/// Output format for the rate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
}

/// Bulletin heading, with the date reformatted when it parses.
pub(crate) fn heading(book: &RateBook) -> String {
    match book.bulletin_date() {
        Some(date) => format!("Exchange rates for {}", date.format("%Y-%m-%d")),
        None if book.date().is_empty() => "Exchange rates (no bulletin loaded)".to_string(),
        None => format!("Exchange rates for {}", book.date()),
    }
}

/// One table row: nominal, name, codes and the quoted value.
pub(crate) fn record_line(record: &RateRecord) -> String {
    format!(
        "{:>6}  {:<40} {:<4} {:<8} {:>12.4}",
        record.nominal,
        record.name,
        record.char_code.as_deref().unwrap_or("-"),
        record.code,
        record.value
    )
}

/// Print the full rate table in document order.
pub(crate) fn print_table(book: &RateBook) {
    println!("{}", heading(book));

    if book.is_empty() {
        println!("No rates available.");
        return;
    }

    println!(
        "{:>6}  {:<40} {:<4} {:<8} {:>12}",
        "UNITS", "NAME", "ISO", "ID", "VALUE"
    );
    println!("{}", "-".repeat(74));
    for record in book {
        println!("{}", record_line(record));
    }
    println!("\nTotal: {} currencies", book.len());
}

/// Print the book as pretty JSON.
pub(crate) fn print_json(book: &RateBook) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(book)?);
    Ok(())
}

/// Print a single record with its per-unit rate.
pub(crate) fn print_record(record: &RateRecord) {
    println!("Currency: {}", record.name);
    println!("ID:       {}", record.code);
    if let Some(char_code) = &record.char_code {
        println!("ISO:      {char_code}");
    }
    println!("Quote:    {} units = {:.4}", record.nominal, record.value);
    match record.per_unit_rate() {
        Some(rate) => println!("Per unit: {rate:.6}"),
        None => println!("Per unit: unavailable (zero nominal or non-positive value)"),
    }
}

/// Label for a code: its ISO code when the book knows it, otherwise the code itself.
pub(crate) fn code_label<'a>(book: &'a RateBook, code: &'a str) -> &'a str {
    book.find_by_code(code)
        .map_or(code, RateRecord::display_code)
}

/// Conversion summary line followed by the cross-rate.
pub(crate) fn conversion_lines(book: &RateBook, conversion: &Conversion) -> [String; 2] {
    let from = code_label(book, &conversion.from);
    let to = code_label(book, &conversion.to);
    [
        format!(
            "{:.2} {from} = {:.2} {to}",
            conversion.amount, conversion.result
        ),
        format!("1 {from} = {:.6} {to}", conversion.cross_rate),
    ]
}

/// Print a conversion result.
pub(crate) fn print_conversion(book: &RateBook, conversion: &Conversion) {
    for line in conversion_lines(book, conversion) {
        println!("{line}");
    }
}

/// Parse a user-entered amount, accepting a comma as the decimal separator.
pub(crate) fn parse_amount(s: &str) -> Result<f64, String> {
    kursy_lib::parse_value(s).ok_or_else(|| format!("not a number: {s}"))
}
