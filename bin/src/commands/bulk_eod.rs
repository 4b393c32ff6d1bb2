//! Bulk EOD command implementation.

use crate::display::{Format, Output, print_bulk};
use anyhow::{Context, Result};
use eodhd_lib::prelude::*;

/// Fetch and print the last trading day for every symbol on `exchange`.
pub(crate) async fn bulk_eod(
    client: &Client,
    exchange: Option<&str>,
    format: Format,
    output: &Output,
    quiet: bool,
) -> Result<()> {
    let (rows, envelope) = client
        .bulk_eod()
        .last_day(exchange, Some(format.into()))
        .await
        .with_context(|| {
            format!(
                "Failed to fetch bulk EOD for {}",
                exchange.unwrap_or(client.country_code())
            )
        })?;

    output.print(&rows, &envelope, quiet, print_bulk)
}
