//! Interactive menu.
//!
//! The bulletin is loaded once at startup. A failed load is reported and the
//! session continues with an empty book, so every lookup reports not found.

use crate::commands::{convert::resolve_code, load_book};
use crate::display::{parse_amount, print_conversion, print_record, print_table};
use anyhow::{Result, anyhow};
use inquire::error::CustomUserError;
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select, Text};
use kursy_lib::prelude::*;
use std::io::IsTerminal;

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ListAll,
    Lookup,
    Convert,
    Exit,
}

impl MenuChoice {
    const ALL: [Self; 4] = [Self::ListAll, Self::Lookup, Self::Convert, Self::Exit];
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::ListAll => "1 - Show all rates",
            Self::Lookup => "2 - Look up a currency by code",
            Self::Convert => "3 - Convert between currencies",
            Self::Exit => "4 - Exit",
        };
        f.write_str(label)
    }
}

/// Load the bulletin and run the menu loop until the user exits.
pub(crate) async fn run(config: ClientConfig, quiet: bool) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(prompt_error(InquireError::NotTTY));
    }

    let book = match load_book(config, quiet).await {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Continuing without rates.");
            RateBook::empty()
        }
    };

    if !book.is_empty() {
        println!("Loaded {} rates from bulletin {}\n", book.len(), book.date());
    }

    loop {
        let choice = match Select::new("Choose an action:", MenuChoice::ALL.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                MenuChoice::Exit
            }
            Err(e) => return Err(prompt_error(e)),
        };

        let outcome = match choice {
            MenuChoice::ListAll => {
                print_table(&book);
                Ok(())
            }
            MenuChoice::Lookup => lookup(&book),
            MenuChoice::Convert => convert_prompt(&book),
            MenuChoice::Exit => {
                println!("Goodbye.");
                return Ok(());
            }
        };

        match outcome {
            Ok(()) => {}
            Err(InquireError::OperationCanceled) => {}
            Err(InquireError::OperationInterrupted) => return Ok(()),
            Err(e) => return Err(prompt_error(e)),
        }
        println!();
    }
}

fn lookup(book: &RateBook) -> Result<(), InquireError> {
    let query = Text::new("Currency code (e.g. USD or R01235):").prompt()?;
    match book.resolve(&query) {
        Ok(record) => print_record(record),
        Err(_) => println!("Currency '{}' not found.", query.trim()),
    }
    Ok(())
}

fn convert_prompt(book: &RateBook) -> Result<(), InquireError> {
    let from = Text::new("Convert from (code):").prompt()?;
    let to = Text::new("Convert to (code):").prompt()?;
    let amount = prompt_amount()?;

    let from = resolve_code(book, &from);
    let to = resolve_code(book, &to);
    match convert(book, &from, &to, amount) {
        Ok(conversion) => print_conversion(book, &conversion),
        Err(ConversionError::UnknownCurrency { code, .. }) => {
            println!("Currency '{code}' not found.");
        }
        Err(ConversionError::InvalidAmount { amount }) => {
            println!("Invalid amount {amount}: must be greater than zero.");
        }
    }
    Ok(())
}

/// Maps a prompt failure to a user-facing error.
fn prompt_error(err: InquireError) -> anyhow::Error {
    match err {
        InquireError::NotTTY => anyhow!(
            "The interactive menu needs a terminal. \
             Use `kursy list`, `kursy show <CODE>` or `kursy convert <FROM> <TO> <AMOUNT>` instead."
        ),
        other => other.into(),
    }
}

/// Accepts only positive finite amounts.
fn validate_amount(amount: &f64) -> Result<Validation, CustomUserError> {
    if amount.is_finite() && *amount > 0.0 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Amount must be greater than zero".into()))
    }
}

/// Prompt until the user enters a positive number.
fn prompt_amount() -> Result<f64, InquireError> {
    CustomType::<f64>::new("Amount:")
        .with_parser(&|s| parse_amount(s).map_err(|_| ()))
        .with_error_message("Please enter a number")
        .with_validator(validate_amount)
        .prompt()
}
