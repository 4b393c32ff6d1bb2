//! HTTP client and request pipeline for the eodhd market data client.
//!
//! This crate provides the pieces every endpoint call flows through:
//!
//! - [`Params`] - Parameter bags that encode to a query string and build their URL
//! - [`url::build_url`] - Joins a base URL, endpoint path and query
//! - [`Client`] - HTTP transport with retries, cancellation and rate limiting
//! - [`RateLimiter`] - Token bucket sized from the `X-RateLimit-Limit` header
//! - [`OhlcvService`], [`ExchangesService`], [`TickerService`], [`BulkEodService`] -
//!   One service per endpoint

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paulschick/eodhd-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod params;
mod rate_limit;
mod response;
mod retry;
mod services;
pub mod url;

pub use client::{Client, ClientConfig};
pub use error::{BuildError, ClientError};
pub use params::{DEFAULT_COUNTRY_CODE, Params, format_of};
pub use rate_limit::{DEFAULT_BURST_FRACTION, DEFAULT_RATE_FRACTION, RateLimiter};
pub use response::{
    RATE_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RawResponse, ResponseEnvelope,
};
pub use retry::{RetryClass, RetryConfig};
pub use services::{
    BulkEodParams, BulkEodService, ExchangeParams, ExchangesService, OhlcvParams, OhlcvService,
    TickerParams, TickerService,
};
pub use tokio_util::sync::CancellationToken;
