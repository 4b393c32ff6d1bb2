//! CLI command implementations.

pub(crate) mod bulk_eod;
pub(crate) mod candles;
pub(crate) mod exchanges;
pub(crate) mod tickers;
