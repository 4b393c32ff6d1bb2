//! Token-bucket rate limiting.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::ClientError;

/// Default share of the published quota the client will use.
pub const DEFAULT_RATE_FRACTION: f64 = 0.75;

/// Default burst size as a share of the published per-second quota.
pub const DEFAULT_BURST_FRACTION: f64 = 0.25;

/// Token-bucket rate limiter.
///
/// Tokens refill continuously at [`rate`](Self::rate) per second up to
/// [`burst`](Self::burst). Each admission takes one token; when the bucket is
/// empty the caller reserves a future token and sleeps until it is due.
#[derive(Debug)]
pub struct RateLimiter {
    rate: f64,
    burst: u32,
    bucket: Mutex<Bucket>,
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last: Instant,
}

impl RateLimiter {
    /// Creates a limiter admitting `rate` calls per second with the given
    /// burst capacity. The bucket starts full.
    ///
    /// A non-positive or non-finite rate admits everything.
    #[must_use]
    pub fn new(rate: f64, burst: u32) -> Self {
        let burst = burst.max(1);
        Self {
            rate,
            burst,
            bucket: Mutex::new(Bucket {
                tokens: f64::from(burst),
                last: Instant::now(),
            }),
        }
    }

    /// Sizes a limiter from a published per-minute quota.
    ///
    /// The rate is `limit / 60 * rate_fraction` per second and the burst is
    /// `limit / 60 * burst_fraction`, floored at 1.
    #[must_use]
    pub fn from_quota(limit_per_minute: u32, rate_fraction: f64, burst_fraction: f64) -> Self {
        let per_second = f64::from(limit_per_minute) / 60.0;
        let burst = (per_second * burst_fraction).floor();
        let burst = if burst >= 1.0 {
            burst.min(f64::from(u32::MAX)) as u32
        } else {
            1
        };
        Self::new(per_second * rate_fraction, burst)
    }

    /// Returns the refill rate in calls per second.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the bucket capacity.
    #[must_use]
    pub const fn burst(&self) -> u32 {
        self.burst
    }

    fn is_unlimited(&self) -> bool {
        !self.rate.is_finite() || self.rate <= 0.0
    }

    /// Takes a token if one is available right now.
    pub fn try_acquire(&self) -> bool {
        if self.is_unlimited() {
            return true;
        }
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        self.refill(&mut bucket);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Waits until a token is available, or until `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] if the token is cancelled first; the
    /// reserved token is handed back.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<(), ClientError> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let wait = self.reserve();
        if wait.is_zero() {
            return Ok(());
        }

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                self.release();
                Err(ClientError::Cancelled)
            }
            () = tokio::time::sleep(wait) => Ok(()),
        }
    }

    /// Takes a token, possibly going into debt, and returns how long the
    /// caller must wait before using it.
    fn reserve(&self) -> Duration {
        if self.is_unlimited() {
            return Duration::ZERO;
        }
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        self.refill(&mut bucket);
        bucket.tokens -= 1.0;
        if bucket.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(-bucket.tokens / self.rate).unwrap_or(Duration::MAX)
        }
    }

    fn release(&self) {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        bucket.tokens = (bucket.tokens + 1.0).min(f64::from(self.burst));
    }

    fn refill(&self, bucket: &mut Bucket) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(bucket.last).as_secs_f64();
        bucket.tokens = elapsed
            .mul_add(self.rate, bucket.tokens)
            .min(f64::from(self.burst));
        bucket.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_quota_defaults() {
        let limiter = RateLimiter::from_quota(120, DEFAULT_RATE_FRACTION, DEFAULT_BURST_FRACTION);
        assert_relative_eq!(limiter.rate(), 1.5);
        assert_eq!(limiter.burst(), 1);
    }

    #[test]
    fn test_from_quota_large_limit() {
        // 1000/min -> 16.67/s; burst 16.67 * 0.25 = 4.17
        let limiter = RateLimiter::from_quota(1000, DEFAULT_RATE_FRACTION, DEFAULT_BURST_FRACTION);
        assert_relative_eq!(limiter.rate(), 12.5, epsilon = 1e-9);
        assert_eq!(limiter.burst(), 4);
    }

    #[test]
    fn test_burst_floored_at_one() {
        let limiter = RateLimiter::from_quota(1, 0.5, 0.01);
        assert_eq!(limiter.burst(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_then_throttle() {
        let limiter = RateLimiter::new(2.0, 2);
        let cancel = CancellationToken::new();
        let start = Instant::now();

        limiter.acquire(&cancel).await.unwrap();
        limiter.acquire(&cancel).await.unwrap();
        assert_eq!(Instant::now(), start);

        limiter.acquire(&cancel).await.unwrap();
        let waited = Instant::now() - start;
        assert!(waited >= Duration::from_millis(499));
        assert!(waited <= Duration::from_millis(550));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_acquire_empties_bucket() {
        let limiter = RateLimiter::new(1.0, 1);
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(limiter.try_acquire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_returns_token() {
        let limiter = RateLimiter::new(1.0, 1);
        let cancel = CancellationToken::new();
        assert!(limiter.try_acquire());

        let child = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            child.cancel();
        });

        let err = limiter.acquire(&cancel).await.unwrap_err();
        assert!(err.is_cancelled());

        // The reservation was handed back, so one second after the first
        // acquire a token is available again.
        tokio::time::advance(Duration::from_millis(900)).await;
        assert!(limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_already_cancelled() {
        let limiter = RateLimiter::new(1.0, 1);
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(limiter.acquire(&cancel).await.is_err());
    }

    #[tokio::test]
    async fn test_zero_rate_is_unlimited() {
        let limiter = RateLimiter::new(0.0, 1);
        let cancel = CancellationToken::new();
        for _ in 0..10 {
            limiter.acquire(&cancel).await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_tiny_rate_wait_saturates() {
        let limiter = RateLimiter::from_quota(60, 1e-300, DEFAULT_BURST_FRACTION);
        assert!(limiter.try_acquire());
        assert_eq!(limiter.reserve(), Duration::MAX);

        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(limiter.acquire(&cancel).await.unwrap_err().is_cancelled());
    }
}
