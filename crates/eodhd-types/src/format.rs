//! Request format selection.

use serde::Serialize;

use crate::FormatParseError;

/// Wire format requested from the API.
///
/// The format is sent as the `fmt` query parameter and also selects how the
/// response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// JSON array of objects.
    Json,
}

impl RequestFormat {
    /// Returns the value sent in the `fmt` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json]
    }
}

impl std::fmt::Display for RequestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RequestFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}
