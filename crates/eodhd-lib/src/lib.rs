//! Rust client for the EODHD end-of-day market data API.
//!
//! This is a facade crate that re-exports functionality from the eodhd
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use eodhd_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(std::env::var("EODHD_API_TOKEN")?)?;
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!     )?;
//!
//!     let (candles, envelope) = client.ohlcv().candles_for("AAPL", Some(range)).await?;
//!     println!("{} candles, quota {}/min", candles.len(), envelope.rate_limit);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/paulschick/eodhd-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use eodhd_types::*;

// Re-export decoders
#[cfg(feature = "format")]
pub use eodhd_format::{CsvDecoder, DecodeError, Decoder, JsonDecoder, decode_into};

// Re-export the client
#[cfg(feature = "fetch")]
pub use eodhd_fetch::{
    BuildError, BulkEodParams, BulkEodService, CancellationToken, Client, ClientConfig,
    ClientError, ExchangeParams, ExchangesService, OhlcvParams, OhlcvService, Params,
    RateLimiter, RawResponse, ResponseEnvelope, RetryClass, RetryConfig, TickerParams,
    TickerService, format_of, url,
};

/// Prelude module for convenient imports.
///
/// ```
/// use eodhd_lib::prelude::*;
/// ```
pub mod prelude {
    pub use eodhd_types::{
        BulkEod, DateRange, DateRangeError, Exchange, Ohlcv, RequestFormat, Ticker,
    };

    #[cfg(feature = "format")]
    pub use eodhd_format::{DecodeError, decode_into};

    #[cfg(feature = "fetch")]
    pub use eodhd_fetch::{
        BulkEodParams, CancellationToken, Client, ClientConfig, ClientError, ExchangeParams,
        OhlcvParams, Params, ResponseEnvelope, RetryConfig, TickerParams,
    };
}
