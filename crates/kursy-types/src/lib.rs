//! Core types for the kursy exchange rate client.
//!
//! This crate provides the data structures shared by the rest of kursy:
//!
//! - [`RateRecord`] - One currency quote from a daily bulletin
//! - [`RateBook`] - The ordered, immutable set of quotes from one bulletin
//! - [`LookupError`] - Lookup failures against a [`RateBook`]
//! - [`KursyError`] - Umbrella error for the load pipeline

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod book;
mod error;
mod record;

pub use book::{BULLETIN_DATE_FORMAT, RateBook};
pub use error::{KursyError, LookupError, Result};
pub use record::RateRecord;
