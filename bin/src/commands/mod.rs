//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod list;
pub(crate) mod menu;
pub(crate) mod show;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use kursy_lib::prelude::*;
use std::time::Duration;

/// Fetch and parse the bulletin once, showing a spinner unless quiet.
pub(crate) async fn load_book(config: ClientConfig, quiet: bool) -> Result<RateBook> {
    let url = config.endpoint.url();
    let client = BulletinClient::new(config).context("Failed to create HTTP client")?;

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid spinner template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Fetching {url}"));
        pb
    };

    let result = client.load().await;
    spinner.finish_and_clear();

    result.with_context(|| format!("Failed to load rates from {url}"))
}
