//! Historical end-of-day candles (`eod/{SYMBOL}.{COUNTRY}`).

use chrono::NaiveDate;
use eodhd_types::{DateRange, Ohlcv, RequestFormat, serialize_opt_date};
use serde::Serialize;

use crate::params::{DEFAULT_COUNTRY_CODE, Params};
use crate::{Client, ClientError, ResponseEnvelope};

/// Query parameters for historical candles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OhlcvParams {
    /// Ticker code, without exchange suffix.
    #[serde(skip)]
    pub symbol: String,
    /// Country or exchange code appended to the symbol.
    #[serde(skip)]
    pub country_code: String,
    /// API token.
    pub api_token: String,
    /// Requested format.
    #[serde(rename = "fmt")]
    pub format: RequestFormat,
    /// First date to include.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_date"
    )]
    pub from: Option<NaiveDate>,
    /// Last date to include.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_date"
    )]
    pub to: Option<NaiveDate>,
}

impl OhlcvParams {
    /// Creates parameters for `symbol` on the US market, in CSV, with no date
    /// bounds.
    #[must_use]
    pub fn new(api_token: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            api_token: api_token.into(),
            format: RequestFormat::Csv,
            from: None,
            to: None,
        }
    }

    /// Sets the country or exchange code.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Sets the requested format.
    #[must_use]
    pub fn with_format(mut self, format: RequestFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the first date to include.
    #[must_use]
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the last date to include.
    #[must_use]
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets both bounds from a validated range.
    #[must_use]
    pub fn with_range(self, range: DateRange) -> Self {
        self.with_from(range.from).with_to(range.to)
    }

    /// Returns the `{SYMBOL}.{COUNTRY}` code used in the path.
    #[must_use]
    pub fn ticker(&self) -> String {
        format!("{}.{}", self.symbol, self.country_code)
    }
}

impl Params for OhlcvParams {
    fn path(&self) -> String {
        format!("eod/{}", self.ticker())
    }
}

/// Service for historical end-of-day candles.
#[derive(Debug, Clone, Copy)]
pub struct OhlcvService<'a> {
    client: &'a Client,
}

impl<'a> OhlcvService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches candles for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode.
    pub async fn candles(
        &self,
        params: &OhlcvParams,
    ) -> Result<(Vec<Ohlcv>, ResponseEnvelope), ClientError> {
        self.client.fetch(params).await
    }

    /// Fetches candles for `symbol` using the client's token, default
    /// country and default format.
    ///
    /// # Errors
    ///
    /// See [`candles`](Self::candles).
    pub async fn candles_for(
        &self,
        symbol: &str,
        range: Option<DateRange>,
    ) -> Result<(Vec<Ohlcv>, ResponseEnvelope), ClientError> {
        let mut params = OhlcvParams::new(self.client.api_token(), symbol)
            .with_country_code(self.client.country_code())
            .with_format(self.client.default_format());
        if let Some(range) = range {
            params = params.with_range(range);
        }
        self.candles(&params).await
    }
}
