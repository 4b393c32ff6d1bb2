//! Request URL construction.

use url::Url;

use crate::BuildError;

/// Default base URL of the API.
pub const DEFAULT_BASE_URL: &str = "https://eodhd.com/api/";

/// Parses a base URL, appending a trailing slash if it is missing.
///
/// # Errors
///
/// Returns an error if the URL does not parse or cannot carry path segments.
pub fn parse_base_url(base: &str) -> Result<Url, BuildError> {
    let url = if base.ends_with('/') {
        Url::parse(base)?
    } else {
        Url::parse(&format!("{base}/"))?
    };

    if url.cannot_be_a_base() {
        return Err(BuildError::CannotBeABase(base.to_string()));
    }
    Ok(url)
}

/// Builds an absolute request URL from a base URL, a relative endpoint path
/// and an encoded query string.
///
/// The base URL is cloned, never modified. An empty `path` leaves the base
/// path untouched and an empty `query` produces no `?`.
///
/// # Example
///
/// ```
/// use eodhd_fetch::url::{build_url, parse_base_url};
///
/// let base = parse_base_url("https://example.com/api").unwrap();
/// let url = build_url(&base, "eod/AAPL.US", "api_token=demo&fmt=csv").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/api/eod/AAPL.US?api_token=demo&fmt=csv");
/// ```
///
/// # Errors
///
/// Returns an error if the base URL cannot carry path segments.
pub fn build_url(base: &Url, path: &str, query: &str) -> Result<Url, BuildError> {
    let mut url = base.clone();

    if !path.is_empty() {
        url.path_segments_mut()
            .map_err(|()| BuildError::CannotBeABase(base.to_string()))?
            .pop_if_empty()
            .extend(path.split('/'));
    }

    url.set_query((!query.is_empty()).then_some(query));
    Ok(url)
}
