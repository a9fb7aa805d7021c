//! kursy CLI - central bank daily exchange rates in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use kursy_lib::endpoint::{DEFAULT_HOST, DEFAULT_PORT};
use kursy_lib::prelude::*;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

mod commands;
mod display;

use display::{Format, parse_amount};

#[derive(Parser)]
#[command(name = "kursy")]
#[command(about = "Central bank daily exchange rates: browse, look up and convert", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output and logs)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Host publishing the daily bulletin
    #[arg(long, default_value = DEFAULT_HOST, global = true)]
    host: String,

    /// HTTP port of the bulletin host
    #[arg(long, default_value_t = DEFAULT_PORT, global = true)]
    port: u16,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all rates in the current bulletin
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show one currency by ISO code (USD) or bulletin ID (R01235)
    Show {
        /// Currency code
        code: String,
    },

    /// Convert an amount between two currencies
    Convert {
        /// Source currency code
        from: String,

        /// Destination currency code
        to: String,

        /// Amount in the source currency
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        amount: f64,
    },
}

/// Maps `-v` count to a log level; quiet mode disables logging entirely.
const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = ClientConfig {
        endpoint: Endpoint::new(cli.host, cli.port),
        timeout: cli.timeout.map(Duration::from_secs),
        ..Default::default()
    };

    // Interactive menu when no command is given
    let Some(command) = cli.command else {
        return commands::menu::run(config, cli.quiet).await;
    };

    let book = commands::load_book(config, cli.quiet).await?;
    match command {
        Commands::List { format } => commands::list::list_rates(&book, format),
        Commands::Show { code } => Ok(commands::show::show_rate(&book, &code)?),
        Commands::Convert { from, to, amount } => {
            commands::convert::convert_amount(&book, &from, &to, amount)
        }
    }
}
