//! Exchange list (`exchanges-list/`).

use eodhd_types::{Exchange, RequestFormat};
use serde::Serialize;

use crate::params::Params;
use crate::{Client, ClientError, ResponseEnvelope};

/// Query parameters for the exchange list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeParams {
    /// API token.
    pub api_token: String,
    /// Requested format.
    #[serde(rename = "fmt")]
    pub format: RequestFormat,
}

impl ExchangeParams {
    /// Creates parameters requesting JSON.
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            format: RequestFormat::Json,
        }
    }

    /// Sets the requested format.
    #[must_use]
    pub fn with_format(mut self, format: RequestFormat) -> Self {
        self.format = format;
        self
    }
}

impl Params for ExchangeParams {
    fn path(&self) -> String {
        "exchanges-list/".to_string()
    }
}

/// Service for the list of supported exchanges.
#[derive(Debug, Clone, Copy)]
pub struct ExchangesService<'a> {
    client: &'a Client,
}

impl<'a> ExchangesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches all supported exchanges. Defaults to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn list(
        &self,
        format: Option<RequestFormat>,
    ) -> Result<(Vec<Exchange>, ResponseEnvelope), ClientError> {
        let mut params = ExchangeParams::new(self.client.api_token());
        if let Some(format) = format {
            params = params.with_format(format);
        }
        self.client.fetch(&params).await
    }
}
