//! End-of-day candle representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single end-of-day OHLCV candle.
///
/// The API names CSV columns in title case (`Date`, `Adjusted_close`) and JSON
/// keys in snake case (`date`, `adjusted_close`); both decode into this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
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
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_json_keys() {
        let candle = Ohlcv {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 10.0,
            high: 12.5,
            low: 9.5,
            close: 11.0,
            adjusted_close: 11.0,
            volume: 100.0,
        };
        let value = serde_json::to_value(candle).unwrap();
        assert_eq!(value["date"], "2024-01-02");
        assert_eq!(value["adjusted_close"], 11.0);
    }

    #[test]
    fn test_deserialize_json_keys() {
        let json = r#"{"date":"2024-01-02","open":187.15,"high":188.44,"low":183.89,
            "close":185.64,"adjusted_close":184.93,"volume":82488700}"#;
        let candle: Ohlcv = serde_json::from_str(json).unwrap();

        assert_eq!(candle.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!((candle.volume - 82_488_700.0).abs() < 1e-6);
        assert!((candle.adjusted_close - 184.93).abs() < 1e-10);
    }
}
