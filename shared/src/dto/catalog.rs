use serde::{Deserialize, Serialize};

/// Currency an exchange supports, and the network it withdraws it on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExchangeCurrency {
    pub asset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Centralized exchange known to the swap service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exchange {
    pub internal_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub currencies: Vec<ExchangeCurrency>,
}

/// Blockchain network known to the swap service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    pub internal_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Settings response: the exchange and network catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogResponse {
    #[serde(default)]
    pub exchanges: Vec<Exchange>,
    #[serde(default)]
    pub networks: Vec<Network>,
}
