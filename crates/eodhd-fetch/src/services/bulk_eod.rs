//! Bulk last-day snapshot (`eod-bulk-last-day/{EXCHANGE}`).

use eodhd_types::{BulkEod, RequestFormat};
use serde::Serialize;

use crate::params::{DEFAULT_COUNTRY_CODE, Params};
use crate::{Client, ClientError, ResponseEnvelope};

/// Query parameters for a bulk end-of-day snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkEodParams {
    /// API token.
    pub api_token: String,
    /// Requested format.
    #[serde(rename = "fmt")]
    pub format: RequestFormat,
    /// Exchange code placed in the path.
    #[serde(skip)]
    pub exchange: String,
}

impl BulkEodParams {
    /// Creates parameters, defaulting to the US exchange and CSV.
    #[must_use]
    pub fn new(
        api_token: impl Into<String>,
        exchange: Option<&str>,
        format: Option<RequestFormat>,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            format: format.unwrap_or(RequestFormat::Csv),
            exchange: exchange.unwrap_or(DEFAULT_COUNTRY_CODE).to_string(),
        }
    }
}

impl Params for BulkEodParams {
    fn path(&self) -> String {
        format!("eod-bulk-last-day/{}", self.exchange)
    }
}

/// Service for bulk end-of-day snapshots.
#[derive(Debug, Clone, Copy)]
pub struct BulkEodService<'a> {
    client: &'a Client,
}

impl<'a> BulkEodService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the most recent trading day for every symbol on `exchange`,
    /// falling back to the client's country code. Defaults to CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn last_day(
        &self,
        exchange: Option<&str>,
        format: Option<RequestFormat>,
    ) -> Result<(Vec<BulkEod>, ResponseEnvelope), ClientError> {
        let exchange = exchange.unwrap_or(self.client.country_code());
        let params = BulkEodParams::new(self.client.api_token(), Some(exchange), format);
        self.client.fetch(&params).await
    }
}
