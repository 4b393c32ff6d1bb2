//! Core types for the eodhd market data client.
//!
//! This crate provides the data structures shared across the workspace:
//!
//! - [`RequestFormat`] - Wire format requested from the API (CSV or JSON)
//! - [`DateRange`] - Inclusive calendar date range for historical queries
//! - [`Ohlcv`] - A single end-of-day candle
//! - [`Exchange`] - An exchange from the exchanges list
//! - [`Ticker`] - A symbol listed on an exchange
//! - [`BulkEod`] - One symbol's row in a bulk end-of-day snapshot

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paulschick/eodhd-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bulk_eod;
mod date;
mod error;
mod exchange;
mod format;
mod ohlcv;
mod ticker;

pub use bulk_eod::BulkEod;
pub use date::{DATE_FORMAT, DateRange, format_date, parse_date, serialize_opt_date};
pub use error::{DateRangeError, FormatParseError};
pub use exchange::Exchange;
pub use format::RequestFormat;
pub use ohlcv::Ohlcv;
pub use ticker::Ticker;
