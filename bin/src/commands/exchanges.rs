//! Exchanges command implementation.

use crate::display::{Format, Output, print_exchanges};
use anyhow::{Context, Result};
use eodhd_lib::prelude::*;

/// Fetch and print the supported exchanges.
pub(crate) async fn exchanges(
    client: &Client,
    format: Format,
    output: &Output,
    quiet: bool,
) -> Result<()> {
    let (exchanges, envelope) = client
        .exchanges()
        .list(Some(format.into()))
        .await
        .context("Failed to fetch exchange list")?;

    output.print(&exchanges, &envelope, quiet, print_exchanges)
}
