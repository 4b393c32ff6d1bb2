//! CSV response decoding.

use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use serde::de::DeserializeOwned;

use crate::{DecodeError, Decoder};

/// CSV decoder.
///
/// The first line of the body is a header row; each following row is mapped
/// onto the target type by (case-sensitive) column name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

impl CsvDecoder {
    /// Creates a new CSV decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Decoder for CsvDecoder {
    async fn decode_into<T>(&self, body: &[u8], out: &mut Vec<T>) -> Result<usize, DecodeError>
    where
        T: DeserializeOwned + Send,
    {
        let mut deserializer = AsyncReaderBuilder::new()
            .has_headers(true)
            .create_deserializer(body);

        let mut records = deserializer.deserialize::<T>();
        let mut count = 0;
        while let Some(record) = records.next().await {
            out.push(record?);
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eodhd_types::{BulkEod, Ticker};

    #[tokio::test]
    async fn test_empty_isin_is_none() {
        let body = "Code,Name,Country,Exchange,Currency,Type,Isin\n\
            AAPL,Apple Inc,USA,NASDAQ,USD,Common Stock,US0378331005\n\
            ZZZ,Unknown Co,USA,OTC,USD,Common Stock,\n";
        let mut tickers: Vec<Ticker> = Vec::new();

        let n = CsvDecoder::new()
            .decode_into(body.as_bytes(), &mut tickers)
            .await
            .unwrap();

        assert_eq!(n, 2);
        assert_eq!(tickers[0].isin.as_deref(), Some("US0378331005"));
        assert_eq!(tickers[1].isin, None);
    }

    #[tokio::test]
    async fn test_missing_isin_column_is_none() {
        let body = "Code,Name,Country,Exchange,Currency,Type\n\
            MSFT,Microsoft Corporation,USA,NASDAQ,USD,Common Stock\n";
        let mut tickers: Vec<Ticker> = Vec::new();

        CsvDecoder::new()
            .decode_into(body.as_bytes(), &mut tickers)
            .await
            .unwrap();

        assert_eq!(tickers.len(), 1);
        assert_eq!(tickers[0].isin, None);
    }

    #[tokio::test]
    async fn test_bulk_eod_columns() {
        let body = "Code,Ex,Date,Open,High,Low,Close,Adjusted_close,Volume\n\
            AAPL,US,2024-04-01,171.19,171.25,169.48,170.03,169.37,46240500\n";
        let mut rows: Vec<BulkEod> = Vec::new();

        CsvDecoder::new()
            .decode_into(body.as_bytes(), &mut rows)
            .await
            .unwrap();

        assert_eq!(rows[0].symbol(), "AAPL.US");
        assert_eq!(rows[0].volume, 46_240_500);
    }

    #[tokio::test]
    async fn test_header_names_are_case_sensitive() {
        let body = "DATE,OPEN,HIGH,LOW,CLOSE,ADJUSTED_CLOSE,VOLUME\n\
            2024-01-02,1,1,1,1,1,1\n";
        let mut rows: Vec<eodhd_types::Ohlcv> = Vec::new();

        let result = CsvDecoder::new()
            .decode_into(body.as_bytes(), &mut rows)
            .await;
        assert!(matches!(result, Err(DecodeError::Csv(_))));
    }

    #[tokio::test]
    async fn test_type_mismatch_fails() {
        let body = "Code,Ex,Date,Open,High,Low,Close,Adjusted_close,Volume\n\
            AAPL,US,2024-04-01,n/a,171.25,169.48,170.03,169.37,46240500\n";
        let mut rows: Vec<BulkEod> = Vec::new();

        let result = CsvDecoder::new()
            .decode_into(body.as_bytes(), &mut rows)
            .await;
        assert!(result.is_err());
        assert!(rows.is_empty());
    }
}
