//! Decoder abstraction and format dispatch.

use std::future::Future;

use eodhd_types::RequestFormat;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{CsvDecoder, JsonDecoder};

/// Errors that can occur while decoding a response body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body did not parse as CSV into the target record type.
    #[error("failed to decode CSV response: {0}")]
    Csv(#[from] csv_async::Error),

    /// The body did not parse as JSON into the target record type.
    #[error("failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Returns the format that was being decoded when the error occurred.
    #[must_use]
    pub const fn format(&self) -> RequestFormat {
        match self {
            Self::Csv(_) => RequestFormat::Csv,
            Self::Json(_) => RequestFormat::Json,
        }
    }
}

/// Trait for response body decoders.
pub trait Decoder: Send + Sync {
    /// Decodes `body` and appends the records to `out`.
    ///
    /// Returns the number of records appended. On error, `out` may hold the
    /// records decoded before the failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not match the expected shape.
    fn decode_into<T>(
        &self,
        body: &[u8],
        out: &mut Vec<T>,
    ) -> impl Future<Output = Result<usize, DecodeError>> + Send
    where
        T: DeserializeOwned + Send;
}

/// Decodes `body` with the decoder for `format`, appending records to `out`.
///
/// # Errors
///
/// Returns a [`DecodeError`] naming the attempted format if the body does not
/// parse.
pub async fn decode_into<T>(
    format: RequestFormat,
    body: &[u8],
    out: &mut Vec<T>,
) -> Result<usize, DecodeError>
where
    T: DeserializeOwned + Send,
{
    match format {
        RequestFormat::Csv => CsvDecoder::new().decode_into(body, out).await,
        RequestFormat::Json => JsonDecoder::new().decode_into(body, out).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eodhd_types::{Ohlcv, Ticker};

    const OHLCV_CSV: &str = "Date,Open,High,Low,Close,Adjusted_close,Volume\n\
        2024-01-02,187.15,188.44,183.89,185.64,184.93,82488700\n\
        2024-01-03,184.22,185.88,183.43,184.25,183.55,58414500\n";

    const OHLCV_JSON: &str = r#"[
        {"date":"2024-01-02","open":187.15,"high":188.44,"low":183.89,"close":185.64,"adjusted_close":184.93,"volume":82488700},
        {"date":"2024-01-03","open":184.22,"high":185.88,"low":183.43,"close":184.25,"adjusted_close":183.55,"volume":58414500}
    ]"#;

    #[tokio::test]
    async fn test_csv_and_json_decode_to_equal_records() {
        let mut from_csv: Vec<Ohlcv> = Vec::new();
        let mut from_json: Vec<Ohlcv> = Vec::new();

        let n_csv = decode_into(RequestFormat::Csv, OHLCV_CSV.as_bytes(), &mut from_csv)
            .await
            .unwrap();
        let n_json = decode_into(RequestFormat::Json, OHLCV_JSON.as_bytes(), &mut from_json)
            .await
            .unwrap();

        assert_eq!(n_csv, 2);
        assert_eq!(n_json, 2);
        assert_eq!(from_csv, from_json);
        assert_eq!(
            from_csv[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[tokio::test]
    async fn test_decode_appends_to_existing_records() {
        let mut out: Vec<Ohlcv> = Vec::new();
        decode_into(RequestFormat::Csv, OHLCV_CSV.as_bytes(), &mut out)
            .await
            .unwrap();
        decode_into(RequestFormat::Json, OHLCV_JSON.as_bytes(), &mut out)
            .await
            .unwrap();
        assert_eq!(out.len(), 4);
    }

    #[tokio::test]
    async fn test_error_names_attempted_format() {
        let mut out: Vec<Ticker> = Vec::new();

        let err = decode_into(RequestFormat::Json, b"not json", &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.format(), RequestFormat::Json);
        assert!(err.to_string().contains("JSON"));

        let err = decode_into(RequestFormat::Csv, b"Code,Name\nAAPL", &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.format(), RequestFormat::Csv);
        assert!(err.to_string().contains("CSV"));
    }

    #[tokio::test]
    async fn test_ticker_csv_and_json_agree_on_empty_isin() {
        let csv = "Code,Name,Country,Exchange,Currency,Type,Isin\n\
            AAPL,Apple Inc,USA,NASDAQ,USD,Common Stock,US0378331005\n\
            ZZZ,Unknown Co,USA,OTC,USD,Common Stock,\n";
        let json = r#"[
            {"Code":"AAPL","Name":"Apple Inc","Country":"USA","Exchange":"NASDAQ","Currency":"USD","Type":"Common Stock","Isin":"US0378331005"},
            {"Code":"ZZZ","Name":"Unknown Co","Country":"USA","Exchange":"OTC","Currency":"USD","Type":"Common Stock","Isin":""}
        ]"#;

        let mut from_csv: Vec<Ticker> = Vec::new();
        let mut from_json: Vec<Ticker> = Vec::new();
        decode_into(RequestFormat::Csv, csv.as_bytes(), &mut from_csv)
            .await
            .unwrap();
        decode_into(RequestFormat::Json, json.as_bytes(), &mut from_json)
            .await
            .unwrap();

        assert_eq!(from_csv, from_json);
        assert_eq!(from_csv[1].isin, None);
    }
}
