//! Error types for eodhd core types.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {from} > {to}")]
    InvalidRange {
        /// The start date.
        from: NaiveDate,
        /// The end date.
        to: NaiveDate,
    },
}

/// Error returned when a string does not name a known request format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown request format: {0} (expected csv or json)")]
pub struct FormatParseError(pub String);
