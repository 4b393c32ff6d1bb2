//! Endpoint services and their parameter bags.

mod bulk_eod;
mod exchanges;
mod ohlcv;
mod tickers;

pub use bulk_eod::{BulkEodParams, BulkEodService};
pub use exchanges::{ExchangeParams, ExchangesService};
pub use ohlcv::{OhlcvParams, OhlcvService};
pub use tickers::{TickerParams, TickerService};
