//! eodhd CLI - end-of-day market data from the EODHD API.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use eodhd_lib::prelude::*;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::candles::CandlesArgs;
use display::{Format, Output};

/// Fallback variable read when `--token` and `EODHD_API_TOKEN` are both unset.
const FALLBACK_TOKEN_VAR: &str = "API_KEY";

#[derive(Parser)]
#[command(name = "eodhd")]
#[command(about = "End-of-day market data from the EODHD API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API token
    #[arg(long, global = true, env = "EODHD_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only print records)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch historical end-of-day candles for a symbol
    Candles(CandlesArgs),

    /// List supported exchanges
    Exchanges {
        /// Format requested from the API
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        #[command(flatten)]
        output: Output,
    },

    /// List symbols traded on an exchange
    Tickers {
        /// Exchange code
        #[arg(default_value = "US")]
        exchange: String,

        /// Only show symbols whose code or name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Format requested from the API
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        #[command(flatten)]
        output: Output,
    },

    /// Fetch the last trading day for every symbol on an exchange
    BulkEod {
        /// Exchange code (defaults to US)
        exchange: Option<String>,

        /// Format requested from the API
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        #[command(flatten)]
        output: Output,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let token = resolve_token(cli.token)?;
    let mut config = ClientConfig::default();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling request");
            trigger.cancel();
        }
    });

    let client = Client::with_config(token, config)
        .context("Failed to create API client")?
        .with_cancellation(cancel);

    match command {
        Commands::Candles(args) => commands::candles::candles(&client, &args, cli.quiet).await,
        Commands::Exchanges { format, output } => {
            commands::exchanges::exchanges(&client, format, &output, cli.quiet).await
        }
        Commands::Tickers {
            exchange,
            search,
            format,
            output,
        } => {
            commands::tickers::tickers(
                &client,
                &exchange,
                search.as_deref(),
                format,
                &output,
                cli.quiet,
            )
            .await
        }
        Commands::BulkEod {
            exchange,
            format,
            output,
        } => {
            commands::bulk_eod::bulk_eod(&client, exchange.as_deref(), format, &output, cli.quiet)
                .await
        }
    }
}

/// Installs the log subscriber. `RUST_LOG` wins over `-v`/`-q`.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,eodhd={level},eodhd_fetch={level},eodhd_format={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}

/// Picks the token from `--token`/`EODHD_API_TOKEN`, then `API_KEY`.
fn resolve_token(flag: Option<String>) -> Result<String> {
    flag.or_else(|| std::env::var(FALLBACK_TOKEN_VAR).ok())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .context("No API token: pass --token or set EODHD_API_TOKEN (or API_KEY)")
}
