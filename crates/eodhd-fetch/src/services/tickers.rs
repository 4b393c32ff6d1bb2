//! Exchange symbol list (`exchange-symbol-list/{EXCHANGE}`).

use eodhd_types::{RequestFormat, Ticker};
use serde::Serialize;

use crate::params::{DEFAULT_COUNTRY_CODE, Params};
use crate::{Client, ClientError, ResponseEnvelope};

/// Query parameters for an exchange's symbol list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerParams {
    /// API token.
    pub api_token: String,
    /// Requested format.
    #[serde(rename = "fmt")]
    pub format: RequestFormat,
    /// Exchange code placed in the path.
    #[serde(skip)]
    pub exchange_code: String,
}

impl TickerParams {
    /// Creates parameters for the given exchange and format.
    #[must_use]
    pub fn new(
        api_token: impl Into<String>,
        exchange_code: impl Into<String>,
        format: RequestFormat,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            format,
            exchange_code: exchange_code.into(),
        }
    }

    /// Creates parameters for US symbols in CSV.
    #[must_use]
    pub fn default_us(api_token: impl Into<String>) -> Self {
        Self::new(api_token, DEFAULT_COUNTRY_CODE, RequestFormat::Csv)
    }
}

impl Params for TickerParams {
    fn path(&self) -> String {
        format!("exchange-symbol-list/{}", self.exchange_code)
    }
}

/// Service for exchange symbol lists.
#[derive(Debug, Clone, Copy)]
pub struct TickerService<'a> {
    client: &'a Client,
}

impl<'a> TickerService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the symbols listed on `exchange_code`. Defaults to CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn list(
        &self,
        exchange_code: &str,
        format: Option<RequestFormat>,
    ) -> Result<(Vec<Ticker>, ResponseEnvelope), ClientError> {
        let params = TickerParams::new(
            self.client.api_token(),
            exchange_code,
            format.unwrap_or(RequestFormat::Csv),
        );
        self.client.fetch(&params).await
    }
}
