//! Retrieval and parsing of daily exchange rate bulletins.
//!
//! This crate provides the load pipeline:
//!
//! - [`endpoint::Endpoint`] - Where the bulletin is published
//! - [`BulletinClient`] - Single-shot plain HTTP client
//! - [`decode_bulletin`] - Decoding by the encoding declared in the XML prologue
//! - [`parse_bulletin`] - XML to [`RateBook`](kursy_types::RateBook) conversion

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decode;
pub mod endpoint;
mod parse;

pub use client::{BulletinClient, ClientConfig, FetchError};
pub use decode::{DecodeError, decode_bulletin, declared_encoding};
pub use parse::{ParseError, parse_bulletin, parse_value};
