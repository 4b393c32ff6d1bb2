//! Candles command implementation.
//!
//! Fetches historical end-of-day candles for one symbol, optionally bounded by
//! a date range.

use crate::display::{Format, Output, print_candles};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use eodhd_lib::parse_date;
use eodhd_lib::prelude::*;

/// Arguments for the `candles` subcommand.
#[derive(Args, Debug)]
pub(crate) struct CandlesArgs {
    /// Ticker code without exchange suffix (e.g., AAPL)
    pub(crate) symbol: String,

    /// Country or exchange code appended to the symbol
    #[arg(short, long, default_value = "US")]
    pub(crate) country: String,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) from: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) to: Option<String>,

    /// Format requested from the API
    #[arg(short, long, value_enum, default_value = "csv")]
    pub(crate) format: Format,

    #[command(flatten)]
    pub(crate) output: Output,
}

/// Fetch and print candles for the requested symbol.
pub(crate) async fn candles(client: &Client, args: &CandlesArgs, quiet: bool) -> Result<()> {
    let params = build_params(client.api_token(), args)?;

    let (candles, envelope) = client
        .ohlcv()
        .candles(&params)
        .await
        .with_context(|| format!("Failed to fetch candles for {}", params.ticker()))?;

    args.output.print(&candles, &envelope, quiet, print_candles)
}

fn build_params(api_token: &str, args: &CandlesArgs) -> Result<OhlcvParams> {
    let from = args.from.as_deref().map(|s| parse_arg("from", s)).transpose()?;
    let to = args.to.as_deref().map(|s| parse_arg("to", s)).transpose()?;

    let params = OhlcvParams::new(api_token, &args.symbol)
        .with_country_code(&args.country)
        .with_format(args.format.into());

    Ok(match (from, to) {
        (Some(from), Some(to)) => {
            let range = DateRange::new(from, to)?;
            tracing::debug!(%range, "requesting date range");
            params.with_range(range)
        }
        (Some(from), None) => params.with_from(from),
        (None, Some(to)) => params.with_to(to),
        (None, None) => params,
    })
}

fn parse_arg(name: &str, value: &str) -> Result<NaiveDate> {
    parse_date(value).with_context(|| format!("Invalid {name} date: {value} (expected YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: Option<&str>, to: Option<&str>) -> CandlesArgs {
        CandlesArgs {
            symbol: "VOD".to_string(),
            country: "LSE".to_string(),
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            format: Format::Json,
            output: Output::default(),
        }
    }

    #[test]
    fn test_parse_arg() {
        assert_eq!(
            parse_arg("from", "2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );

        let err = parse_arg("to", "01/02/2024").unwrap_err();
        assert!(err.to_string().contains("Invalid to date"));
    }

    #[test]
    fn test_build_params_with_range() {
        let params = build_params("t", &args(Some("2024-01-01"), Some("2024-03-31"))).unwrap();

        assert_eq!(params.ticker(), "VOD.LSE");
        assert_eq!(
            params.encode().unwrap(),
            "api_token=t&fmt=json&from=2024-01-01&to=2024-03-31"
        );
    }

    #[test]
    fn test_build_params_rejects_reversed_range() {
        assert!(build_params("t", &args(Some("2024-03-31"), Some("2024-01-01"))).is_err());
    }

    #[test]
    fn test_build_params_open_ended() {
        let params = build_params("t", &args(None, Some("2024-01-01"))).unwrap();
        assert_eq!(params.encode().unwrap(), "api_token=t&fmt=json&to=2024-01-01");
    }
}
