//! Tickers command implementation.
//!
//! Lists the symbols traded on an exchange with an optional case-insensitive
//! search over code and name.

use crate::display::{Format, Output, print_tickers};
use anyhow::{Context, Result};
use eodhd_lib::prelude::*;

/// Fetch and print the symbols listed on `exchange`.
pub(crate) async fn tickers(
    client: &Client,
    exchange: &str,
    search: Option<&str>,
    format: Format,
    output: &Output,
    quiet: bool,
) -> Result<()> {
    let (mut tickers, envelope) = client
        .tickers()
        .list(exchange, Some(format.into()))
        .await
        .with_context(|| format!("Failed to fetch symbols for {exchange}"))?;

    if let Some(pattern) = search {
        tickers.retain(|ticker| matches(ticker, pattern));
    }

    output.print(&tickers, &envelope, quiet, print_tickers)
}

fn matches(ticker: &Ticker, pattern: &str) -> bool {
    let pattern = pattern.to_lowercase();
    ticker.code.to_lowercase().contains(&pattern) || ticker.name.to_lowercase().contains(&pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(code: &str, name: &str) -> Ticker {
        Ticker {
            code: code.to_string(),
            name: name.to_string(),
            country: "USA".to_string(),
            exchange: "NASDAQ".to_string(),
            currency: "USD".to_string(),
            kind: "Common Stock".to_string(),
            isin: None,
        }
    }

    #[test]
    fn test_matches_code_or_name() {
        let apple = ticker("AAPL", "Apple Inc");
        assert!(matches(&apple, "aapl"));
        assert!(matches(&apple, "APPLE"));
        assert!(!matches(&apple, "msft"));
    }
}
