//! Retry classification and backoff.

use std::time::Duration;

use rand::Rng;
use reqwest::StatusCode;

/// Retry policy for the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Lower bound of the per-step wait.
    pub min_wait: Duration,
    /// Upper bound of the per-step wait.
    pub max_wait: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            min_wait: Duration::from_millis(250),
            max_wait: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            min_wait: Duration::ZERO,
            max_wait: Duration::ZERO,
        }
    }

    /// Calculates the wait before retry number `attempt` (1-based).
    ///
    /// Linear backoff with jitter: `attempt * (min_wait + U[0, max_wait - min_wait])`.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let span = self.max_wait.saturating_sub(self.min_wait);
        let jitter = if span.is_zero() {
            Duration::ZERO
        } else {
            let nanos = u64::try_from(span.as_nanos()).unwrap_or(u64::MAX);
            Duration::from_nanos(rand::rng().random_range(0..=nanos))
        };

        (self.min_wait + jitter).saturating_mul(attempt.max(1))
    }
}

/// How a response or failure is treated by the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryClass {
    /// Server-side or network failure that may succeed on retry.
    Transient,
    /// The server asked us to slow down (429).
    RateLimited,
    /// Returned to the caller as-is.
    Final,
}

impl RetryClass {
    /// Classifies a response status.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimited
        } else if status.is_server_error() {
            Self::Transient
        } else {
            Self::Final
        }
    }

    /// Classifies a transport error.
    #[must_use]
    pub fn from_error(error: &reqwest::Error) -> Self {
        // Builder errors are configuration problems and will fail again
        if error.is_builder() {
            return Self::Final;
        }

        if error.is_timeout() || error.is_connect() || error.is_request() || error.is_body() {
            Self::Transient
        } else {
            Self::Final
        }
    }

    /// Returns true if the retry loop should try again.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient | Self::RateLimited)
    }
}
