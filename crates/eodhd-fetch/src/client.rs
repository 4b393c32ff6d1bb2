//! HTTP client: transport, retries and rate limiting.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use eodhd_format::decode_into;
use eodhd_types::RequestFormat;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::params::{DEFAULT_COUNTRY_CODE, Params, format_of};
use crate::rate_limit::{DEFAULT_BURST_FRACTION, DEFAULT_RATE_FRACTION, RateLimiter};
use crate::response::{RawResponse, ResponseEnvelope};
use crate::retry::{RetryClass, RetryConfig};
use crate::services::{BulkEodService, ExchangesService, OhlcvService, TickerService};
use crate::url::{DEFAULT_BASE_URL, parse_base_url};
use crate::{BuildError, ClientError};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API. A trailing slash is added if missing.
    pub base_url: String,
    /// Country code appended to symbols when none is given.
    pub country_code: String,
    /// Format used by services when the caller does not pick one.
    pub default_format: RequestFormat,
    /// User agent string.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Retry policy for 429, 5xx and network failures.
    pub retry: RetryConfig,
    /// Share of the published per-minute quota to use.
    pub rate_limit_fraction: f64,
    /// Burst size as a share of the published per-second quota.
    pub burst_fraction: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            default_format: RequestFormat::Csv,
            user_agent: format!("eodhd/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            retry: RetryConfig::default(),
            rate_limit_fraction: DEFAULT_RATE_FRACTION,
            burst_fraction: DEFAULT_BURST_FRACTION,
        }
    }
}

impl ClientConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the default country code.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Sets the default request format.
    #[must_use]
    pub const fn with_default_format(mut self, format: RequestFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Uses `fraction` of the published quota, leaving the rest as burst
    /// (burst fraction becomes `1 - fraction`).
    #[must_use]
    pub fn with_rate_limit_fraction(mut self, fraction: f64) -> Self {
        self.rate_limit_fraction = fraction;
        self.burst_fraction = 1.0 - fraction;
        self
    }

    /// Overrides the burst fraction alone.
    #[must_use]
    pub const fn with_burst_fraction(mut self, fraction: f64) -> Self {
        self.burst_fraction = fraction;
        self
    }

    /// Checks that the rate-limit fractions are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the rate fraction is outside `(0, 1]`
    /// or the burst fraction is outside `[0, 1]`. A zero burst fraction still
    /// yields a burst of one.
    pub fn validate(&self) -> Result<(), ClientError> {
        let rate = self.rate_limit_fraction;
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(ClientError::Config(format!(
                "rate_limit_fraction must be in (0, 1], got {rate}"
            )));
        }
        let burst = self.burst_fraction;
        if !(0.0..=1.0).contains(&burst) {
            return Err(ClientError::Config(format!(
                "burst_fraction must be in [0, 1], got {burst}"
            )));
        }
        Ok(())
    }
}

struct Inner {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
    config: ClientConfig,
    limiter: OnceLock<RateLimiter>,
}

impl std::fmt::Debug for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inner")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .field("config", &self.config)
            .field("limiter", &self.limiter.get())
            .finish_non_exhaustive()
    }
}

/// API client shared by all endpoint services.
///
/// Cloning is cheap; clones share the connection pool and the rate limiter.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<Inner>,
    cancel: CancellationToken,
}

impl Client {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_token: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(api_token, ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the base URL does not
    /// parse, or the HTTP client cannot be created.
    pub fn with_config(
        api_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        let base_url = parse_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(BuildError::Client)?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                api_token: api_token.into(),
                config,
                limiter: OnceLock::new(),
            }),
            cancel: CancellationToken::new(),
        })
    }

    /// Returns a clone whose calls are cancelled when `cancel` fires.
    ///
    /// The clone shares the connection pool and rate limiter with `self`.
    #[must_use]
    pub fn with_cancellation(&self, cancel: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel,
        }
    }

    /// Returns the API token.
    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.inner.api_token
    }

    /// Returns the base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the default country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.inner.config.country_code
    }

    /// Returns the default request format.
    #[must_use]
    pub fn default_format(&self) -> RequestFormat {
        self.inner.config.default_format
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the rate limiter, once a response has configured it.
    #[must_use]
    pub fn rate_limiter(&self) -> Option<&RateLimiter> {
        self.inner.limiter.get()
    }

    /// Historical end-of-day candles.
    #[must_use]
    pub const fn ohlcv(&self) -> OhlcvService<'_> {
        OhlcvService::new(self)
    }

    /// Supported exchanges.
    #[must_use]
    pub const fn exchanges(&self) -> ExchangesService<'_> {
        ExchangesService::new(self)
    }

    /// Symbols listed on an exchange.
    #[must_use]
    pub const fn tickers(&self) -> TickerService<'_> {
        TickerService::new(self)
    }

    /// Last-day snapshots for a whole exchange.
    #[must_use]
    pub const fn bulk_eod(&self) -> BulkEodService<'_> {
        BulkEodService::new(self)
    }

    /// Fetches and decodes the records for any parameter bag.
    ///
    /// The body is decoded in the format named by the built URL's `fmt`
    /// parameter.
    ///
    /// # Errors
    ///
    /// Returns a build error before any request is sent, a transport or
    /// cancellation error from the request itself, [`ClientError::Status`] for
    /// a non-success status, or a decode error.
    pub async fn fetch<P, T>(&self, params: &P) -> Result<(Vec<T>, ResponseEnvelope), ClientError>
    where
        P: Params,
        T: DeserializeOwned + Send,
    {
        let url = params.build_path(self.base_url())?;
        let response = self.get(&url, None).await?;

        if !response.envelope.is_success() {
            return Err(ClientError::Status {
                status: response.envelope.status,
                body: response.text(),
            });
        }

        let format = format_of(&url);
        let mut records = Vec::new();
        let count = decode_into(format, &response.body, &mut records)
            .await
            .inspect_err(|e| {
                warn!(path = url.path(), format = %e.format(), error = %e, "decode failed");
            })?;
        debug!(path = url.path(), %format, count, "decoded response");

        Ok((records, response.envelope))
    }

    /// Issues a GET request, retrying 429, 5xx and transient network errors.
    ///
    /// Extra `headers` are merged over the defaults; on collision the caller's
    /// value wins. The returned response is fully drained and may carry any
    /// status: non-retryable statuses come back unchanged, and when retries
    /// run out the last retryable response is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] if the client's cancellation token
    /// fires, or [`ClientError::Transport`] for the last network failure.
    pub async fn get(
        &self,
        url: &Url,
        headers: Option<&HeaderMap>,
    ) -> Result<RawResponse, ClientError> {
        let retry = self.inner.config.retry;
        let mut attempt: u32 = 0;

        loop {
            if self.cancel.is_cancelled() {
                return Err(ClientError::Cancelled);
            }
            if let Some(limiter) = self.inner.limiter.get() {
                limiter.acquire(&self.cancel).await?;
            }

            debug!(path = url.path(), attempt, "sending request");
            let outcome = tokio::select! {
                biased;
                () = self.cancel.cancelled() => return Err(ClientError::Cancelled),
                outcome = self.send_once(url, headers) => outcome,
            };

            let class = match &outcome {
                Ok(response) => match reqwest::StatusCode::from_u16(response.envelope.status) {
                    Ok(status) => RetryClass::from_status(status),
                    Err(_) => RetryClass::Final,
                },
                Err(e) => RetryClass::from_error(e),
            };

            if class.is_retryable() && attempt < retry.max_retries {
                attempt += 1;
                let delay = retry.backoff(attempt);
                match &outcome {
                    Ok(response) => warn!(
                        path = url.path(),
                        status = response.envelope.status,
                        attempt,
                        ?delay,
                        "retrying request"
                    ),
                    Err(e) => warn!(path = url.path(), error = %e, attempt, ?delay, "retrying request"),
                }
                self.sleep(delay).await?;
                continue;
            }

            let response = outcome?;
            self.observe_rate_limit(&response.envelope);
            return Ok(response);
        }
    }

    /// Sends one request and drains the body.
    async fn send_once(
        &self,
        url: &Url,
        headers: Option<&HeaderMap>,
    ) -> Result<RawResponse, reqwest::Error> {
        let mut request = self.inner.http.get(url.clone());
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }

        let response = request.send().await?;
        let envelope = ResponseEnvelope::from_parts(response.status(), response.headers());
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse {
            envelope,
            headers,
            body,
        })
    }

    async fn sleep(&self, delay: Duration) -> Result<(), ClientError> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ClientError::Cancelled),
            () = tokio::time::sleep(delay) => Ok(()),
        }
    }

    /// Sizes the rate limiter from the first successful response that
    /// publishes a quota. Later responses never reconfigure it.
    ///
    /// Returns true only for the call that configured the limiter.
    fn observe_rate_limit(&self, envelope: &ResponseEnvelope) -> bool {
        if !envelope.is_success() || envelope.rate_limit == 0 || self.inner.limiter.get().is_some()
        {
            return false;
        }

        let config = &self.inner.config;
        let mut configured = false;
        let limiter = self.inner.limiter.get_or_init(|| {
            configured = true;
            RateLimiter::from_quota(
                envelope.rate_limit,
                config.rate_limit_fraction,
                config.burst_fraction,
            )
        });

        if configured {
            // the response that carried the quota used one token
            limiter.try_acquire();
            info!(
                limit_per_minute = envelope.rate_limit,
                rate = limiter.rate(),
                burst = limiter.burst(),
                "rate limiter configured"
            );
        }
        configured
    }
}
