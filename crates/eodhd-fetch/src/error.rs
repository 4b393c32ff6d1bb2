//! Error types for request building and transport.

use eodhd_format::DecodeError;
use thiserror::Error;

/// Errors raised while assembling a request, before any network activity.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("Base URL cannot carry a path: {0}")]
    CannotBeABase(String),

    /// A parameter could not be encoded into the query string.
    #[error("Failed to encode query parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors returned by [`Client`](crate::Client) calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request assembly failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The client configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request failed at the network level, after any retries.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call was cancelled before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The server answered with a non-success status that was not retried,
    /// or retries were exhausted.
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded as UTF-8.
        body: String,
    },

    /// The response body did not parse in the requested format.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ClientError {
    /// Returns the HTTP status code if the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the call was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
