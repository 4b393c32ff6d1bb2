//! JSON response decoding.

use serde::de::DeserializeOwned;

use crate::{DecodeError, Decoder};

/// JSON decoder.
///
/// Expects the body to be a JSON array of objects keyed by field name.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Creates a new JSON decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    async fn decode_into<T>(&self, body: &[u8], out: &mut Vec<T>) -> Result<usize, DecodeError>
    where
        T: DeserializeOwned + Send,
    {
        let records: Vec<T> = serde_json::from_slice(body)?;
        let count = records.len();
        out.extend(records);
        Ok(count)
    }
}
