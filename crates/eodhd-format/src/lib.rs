//! Response decoding for the eodhd market data client.
//!
//! This crate turns raw response bodies into typed records:
//!
//! - [`CsvDecoder`] - CSV bodies with a header row
//! - [`JsonDecoder`] - JSON array bodies
//! - [`decode_into`] - Picks the decoder for a [`RequestFormat`](eodhd_types::RequestFormat)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paulschick/eodhd-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod decoder;
mod json;

pub use crate::csv::CsvDecoder;
pub use decoder::{DecodeError, Decoder, decode_into};
pub use json::JsonDecoder;
