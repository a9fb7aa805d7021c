//! Cross-rate currency conversion for kursy.
//!
//! - [`convert`] - Converts an amount between two currencies of a rate book
//! - [`Conversion`] - The result together with the cross-rate used

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod converter;

pub use converter::{Conversion, ConversionError, convert};
