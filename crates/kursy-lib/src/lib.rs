//! Library for fetching, browsing and converting central bank exchange rates.
//!
//! This is a facade crate that re-exports functionality from the kursy
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use kursy_lib::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = BulletinClient::with_defaults()?;
//!     let book = client.load().await?;
//!
//!     let usd = book.resolve("USD")?;
//!     let eur = book.resolve("EUR")?;
//!     let conversion = convert(&book, &usd.code, &eur.code, 100.0)?;
//!     println!("100 USD = {:.2} EUR", conversion.result);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use kursy_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use kursy_fetch::{
    BulletinClient, ClientConfig, DecodeError, FetchError, ParseError, decode_bulletin,
    endpoint, parse_bulletin, parse_value,
};

// Re-export conversion
#[cfg(feature = "convert")]
pub use kursy_convert::{Conversion, ConversionError, convert};

/// Prelude module for convenient imports.
///
/// ```
/// use kursy_lib::prelude::*;
/// ```
pub mod prelude {
    pub use kursy_types::{KursyError, LookupError, RateBook, RateRecord, Result};

    #[cfg(feature = "fetch")]
    pub use kursy_fetch::{BulletinClient, ClientConfig, endpoint::Endpoint};

    #[cfg(feature = "convert")]
    pub use kursy_convert::{Conversion, ConversionError, convert};
}
