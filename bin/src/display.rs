//! Display utilities and output formatting for the eodhd CLI.

use anyhow::Result;
use clap::{Args, ValueEnum};
use eodhd_lib::prelude::*;
use serde::Serialize;

/// Wire format requested from the API.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
}

impl From<Format> for RequestFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
        }
    }
}

/// Output options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub(crate) struct Output {
    /// Print at most this many records
    #[arg(short, long)]
    pub(crate) limit: Option<usize>,

    /// Print records as pretty JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl Output {
    /// Returns the records to print after applying `--limit`.
    pub(crate) fn take<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        match self.limit {
            Some(limit) if limit < records.len() => &records[..limit],
            _ => records,
        }
    }

    /// Prints `records` as JSON or through `table`, then a footer unless quiet.
    pub(crate) fn print<T: Serialize>(
        &self,
        records: &[T],
        envelope: &ResponseEnvelope,
        quiet: bool,
        table: impl Fn(&[T]),
    ) -> Result<()> {
        let shown = self.take(records);

        if self.json {
            println!("{}", serde_json::to_string_pretty(shown)?);
        } else if shown.is_empty() {
            println!("No records found.");
        } else {
            table(shown);
        }

        if !quiet && !self.json {
            print_footer(shown.len(), records.len(), envelope);
        }
        Ok(())
    }
}

/// Prints the record count and the quota reported by the server.
fn print_footer(shown: usize, total: usize, envelope: &ResponseEnvelope) {
    if shown < total {
        println!("\nShowing {shown} of {total} records");
    } else {
        println!("\nTotal: {total} records");
    }
    if envelope.rate_limit > 0 {
        println!(
            "Rate limit: {}/{} requests remaining this minute",
            envelope.rate_limit_remaining, envelope.rate_limit
        );
    }
}

pub(crate) fn print_candles(candles: &[Ohlcv]) {
    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "ADJ CLOSE", "VOLUME"
    );
    println!("{}", "-".repeat(92));

    for candle in candles {
        println!(
            "{:<12} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>14.0}",
            candle.date.to_string(),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.adjusted_close,
            candle.volume
        );
    }
}

pub(crate) fn print_exchanges(exchanges: &[Exchange]) {
    println!(
        "{:<10} {:<40} {:<20} {:<8} {:<20}",
        "CODE", "NAME", "COUNTRY", "CURRENCY", "MIC"
    );
    println!("{}", "-".repeat(102));

    for exchange in exchanges {
        println!(
            "{:<10} {:<40} {:<20} {:<8} {:<20}",
            exchange.code,
            truncate(&exchange.name, 40),
            truncate(&exchange.country, 20),
            exchange.currency,
            truncate(&exchange.operating_mic, 20)
        );
    }
}

pub(crate) fn print_tickers(tickers: &[Ticker]) {
    println!(
        "{:<12} {:<36} {:<10} {:<8} {:<16} {:<12}",
        "CODE", "NAME", "EXCHANGE", "CURRENCY", "TYPE", "ISIN"
    );
    println!("{}", "-".repeat(99));

    for ticker in tickers {
        println!(
            "{:<12} {:<36} {:<10} {:<8} {:<16} {:<12}",
            ticker.code,
            truncate(&ticker.name, 36),
            ticker.exchange,
            ticker.currency,
            truncate(&ticker.kind, 16),
            ticker.isin.as_deref().unwrap_or("-")
        );
    }
}

pub(crate) fn print_bulk(rows: &[BulkEod]) {
    println!(
        "{:<16} {:<12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "SYMBOL", "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"
    );
    println!("{}", "-".repeat(96));

    for row in rows {
        println!(
            "{:<16} {:<12} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>14}",
            row.symbol(),
            row.date.to_string(),
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume
        );
    }
}

/// Shortens `s` to at most `max` characters, marking the cut with `~`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}
