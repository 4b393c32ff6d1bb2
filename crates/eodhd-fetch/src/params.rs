//! Query parameter encoding shared by every endpoint.

use eodhd_types::RequestFormat;
use serde::Serialize;
use url::Url;

use crate::BuildError;
use crate::url::build_url;

/// Country code used when none is given.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// A parameter bag for one endpoint.
///
/// Fields serialized by `serde` become query parameters in declaration order;
/// fields marked `#[serde(skip)]` feed only the endpoint [`path`](Self::path).
/// Optional fields should carry `skip_serializing_if = "Option::is_none"` so
/// that an unset value leaves no key behind.
pub trait Params: Serialize {
    /// Returns the endpoint path relative to the base URL, e.g. `eod/AAPL.US`.
    fn path(&self) -> String;

    /// Encodes the bag as a query string.
    ///
    /// # Errors
    ///
    /// Returns an error if a field cannot be represented as a query value.
    fn encode(&self) -> Result<String, BuildError> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Builds the full request URL against `base`, leaving `base` untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or `base` cannot carry a path.
    fn build_path(&self, base: &Url) -> Result<Url, BuildError> {
        build_url(base, &self.path(), &self.encode()?)
    }
}

/// Reads the requested format back from a built URL's `fmt` parameter.
///
/// Defaults to CSV when the parameter is absent or unrecognised, which is
/// what the API itself does.
#[must_use]
pub fn format_of(url: &Url) -> RequestFormat {
    url.query_pairs()
        .find(|(key, _)| key == "fmt")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or_default()
}
