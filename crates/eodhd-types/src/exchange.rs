//! Exchange metadata.

use serde::{Deserialize, Serialize};

/// An exchange supported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exchange {
    /// Exchange name.
    pub name: String,
    /// Exchange code used in symbol suffixes and exchange-scoped endpoints.
    pub code: String,
    /// ISO 10383 operating MIC(s), comma separated.
    #[serde(rename = "OperatingMIC")]
    pub operating_mic: String,
    /// Country name.
    pub country: String,
    /// Trading currency.
    pub currency: String,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(rename = "CountryISO2")]
    pub country_iso2: String,
    /// ISO 3166-1 alpha-3 country code.
    #[serde(rename = "CountryISO3")]
    pub country_iso3: String,
}
