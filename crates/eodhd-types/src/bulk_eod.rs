//! Bulk end-of-day snapshot rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One symbol's end-of-day values from a bulk exchange snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkEod {
    /// Ticker code.
    #[serde(rename = "code", alias = "Code")]
    pub code: String,
    /// Exchange short name.
    #[serde(rename = "exchange_short_name", alias = "Ex")]
    pub exchange: String,
    /// Trading date.
    #[serde(rename = "date", alias = "Date")]
    pub date: NaiveDate,
    /// Opening price.
    #[serde(rename = "open", alias = "Open")]
    pub open: f64,
    /// Highest price.
    #[serde(rename = "high", alias = "High")]
    pub high: f64,
    /// Lowest price.
    #[serde(rename = "low", alias = "Low")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "close", alias = "Close")]
    pub close: f64,
    /// Closing price adjusted for splits and dividends.
    #[serde(rename = "adjusted_close", alias = "Adjusted_close")]
    pub adjusted_close: f64,
    /// Traded volume.
    #[serde(rename = "volume", alias = "Volume")]
    pub volume: u64,
}

impl BulkEod {
    /// Returns the `{CODE}.{EXCHANGE}` symbol for this row.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}.{}", self.code, self.exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json_keys() {
        let json = r#"{"code":"AAPL","exchange_short_name":"US","date":"2024-04-01",
            "open":171.19,"high":171.25,"low":169.48,"close":170.03,
            "adjusted_close":169.37,"volume":46240500}"#;
        let row: BulkEod = serde_json::from_str(json).unwrap();

        assert_eq!(row.exchange, "US");
        assert_eq!(row.volume, 46_240_500);
        assert_eq!(row.symbol(), "AAPL.US");
    }
}
