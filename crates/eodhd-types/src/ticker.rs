//! Exchange symbol list entries.

use serde::{Deserialize, Deserializer, Serialize};

/// A symbol listed on an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    /// Ticker code, without exchange suffix.
    pub code: String,
    /// Instrument name.
    pub name: String,
    /// Country of listing.
    pub country: String,
    /// Exchange the instrument trades on.
    pub exchange: String,
    /// Trading currency.
    pub currency: String,
    /// Instrument type (e.g. "Common Stock", "ETF").
    #[serde(rename = "Type")]
    pub kind: String,
    /// ISIN, when the API knows one. Empty values read as `None`.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub isin: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_isin_is_none() {
        let json = r#"{"Code":"AAPL","Name":"Apple Inc","Country":"USA","Exchange":"NASDAQ",
            "Currency":"USD","Type":"Common Stock"}"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();

        assert_eq!(ticker.kind, "Common Stock");
        assert_eq!(ticker.isin, None);
    }

    #[test]
    fn test_null_isin_is_none() {
        let json = r#"{"Code":"X","Name":"X","Country":"USA","Exchange":"NYSE",
            "Currency":"USD","Type":"ETF","Isin":null}"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.isin, None);
    }

    #[test]
    fn test_empty_isin_is_none() {
        let json = r#"{"Code":"ZZZ","Name":"Unknown Co","Country":"USA","Exchange":"OTC",
            "Currency":"USD","Type":"Common Stock","Isin":""}"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.isin, None);
    }

    #[test]
    fn test_isin_kept() {
        let json = r#"{"Code":"AAPL","Name":"Apple Inc","Country":"USA","Exchange":"NASDAQ",
            "Currency":"USD","Type":"Common Stock","Isin":"US0378331005"}"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.isin.as_deref(), Some("US0378331005"));
    }
}
