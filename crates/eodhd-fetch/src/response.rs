//! Response envelope and rate-limit headers.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Header carrying the per-minute request quota.
pub const RATE_LIMIT_HEADER: &str = "X-RateLimit-Limit";

/// Header carrying the remaining requests in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// Metadata returned alongside decoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// HTTP status code.
    pub status: u16,
    /// Published per-minute quota, or 0 if the header was absent.
    pub rate_limit: u32,
    /// Remaining requests, or 0 if the header was absent.
    pub rate_limit_remaining: u32,
}

impl ResponseEnvelope {
    /// Builds an envelope from a status and response headers.
    ///
    /// Missing or unparseable rate-limit headers read as 0.
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: &HeaderMap) -> Self {
        Self {
            status: status.as_u16(),
            rate_limit: header_u32(headers, RATE_LIMIT_HEADER),
            rate_limit_remaining: header_u32(headers, RATE_LIMIT_REMAINING_HEADER),
        }
    }

    /// Returns true for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

fn header_u32(headers: &HeaderMap, name: &str) -> u32 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// A fully drained HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status and rate-limit counters.
    pub envelope: ResponseEnvelope,
    /// All response headers.
    pub headers: HeaderMap,
    /// Complete response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Returns the body lossily decoded as UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_headers_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("1000"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static(" 998 "));

        let envelope = ResponseEnvelope::from_parts(StatusCode::OK, &headers);
        assert_eq!(envelope.rate_limit, 1000);
        assert_eq!(envelope.rate_limit_remaining, 998);
        assert!(envelope.is_success());
    }

    #[test]
    fn test_missing_or_garbage_headers_are_zero() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("lots"));

        let envelope = ResponseEnvelope::from_parts(StatusCode::NOT_FOUND, &headers);
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.rate_limit, 0);
        assert_eq!(envelope.rate_limit_remaining, 0);
        assert!(!envelope.is_success());
    }
}
