//! # Exchange & Network Catalog
//!
//! Read-only lookup tables built once from the settings endpoint and shared by
//! reference (`Arc<Catalog>`) for the rest of the session. All lookups are pure and
//! return `None` for unknown names.

use std::time::Duration;

use shared::{CatalogResponse, Exchange, ExchangeCurrency, Network};

use crate::core::error::{AppError, Result};
use crate::core::service::SwapApi;

/// Either side of a swap: an exchange account or a blockchain network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRef<'a> {
    Exchange(&'a Exchange),
    Network(&'a Network),
}

impl<'a> EndpointRef<'a> {
    pub fn internal_name(&self) -> &'a str {
        match self {
            EndpointRef::Exchange(e) => &e.internal_name,
            EndpointRef::Network(n) => &n.internal_name,
        }
    }

    pub fn display_name(&self) -> &'a str {
        match self {
            EndpointRef::Exchange(e) => &e.display_name,
            EndpointRef::Network(n) => &n.display_name,
        }
    }

    pub fn logo(&self) -> Option<&'a str> {
        match self {
            EndpointRef::Exchange(e) => e.logo.as_deref(),
            EndpointRef::Network(n) => n.logo.as_deref(),
        }
    }

    pub fn is_exchange(&self) -> bool {
        matches!(self, EndpointRef::Exchange(_))
    }
}

/// Known exchanges and networks
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    exchanges: Vec<Exchange>,
    networks: Vec<Network>,
}

impl Catalog {
    pub fn new(exchanges: Vec<Exchange>, networks: Vec<Network>) -> Self {
        Self { exchanges, networks }
    }

    pub fn exchange(&self, internal_name: &str) -> Option<&Exchange> {
        self.exchanges.iter().find(|e| e.internal_name == internal_name)
    }

    pub fn network(&self, internal_name: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.internal_name == internal_name)
    }

    /// Network lookup ignoring ASCII case, used when the name comes from an exchange
    /// currency entry rather than from a swap record.
    pub fn network_ignore_case(&self, internal_name: &str) -> Option<&Network> {
        self.networks
            .iter()
            .find(|n| n.internal_name.eq_ignore_ascii_case(internal_name))
    }

    /// Default currency entry of `exchange` for `asset` (asset compared ignoring case).
    pub fn default_currency<'a>(&self, exchange: &'a Exchange, asset: &str) -> Option<&'a ExchangeCurrency> {
        exchange
            .currencies
            .iter()
            .find(|c| c.is_default && c.asset.eq_ignore_ascii_case(asset))
    }

    /// Resolve an endpoint: the exchange when one is named, otherwise the network.
    ///
    /// A named but unknown exchange does not fall back to the network.
    pub fn resolve_endpoint(&self, exchange: Option<&str>, network: Option<&str>) -> Option<EndpointRef<'_>> {
        match exchange {
            Some(name) => self.exchange(name).map(EndpointRef::Exchange),
            None => network.and_then(|name| self.network(name)).map(EndpointRef::Network),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty() && self.networks.is_empty()
    }

    /// Fetch the catalog from the settings endpoint, bounded by `timeout`.
    pub async fn load(api: &dyn SwapApi, timeout: Duration) -> Result<Self> {
        let response = tokio::time::timeout(timeout, api.get_settings())
            .await
            .map_err(|_| AppError::Timeout(timeout))?
            .map_err(AppError::Api)?;

        tracing::info!(
            exchanges = response.exchanges.len(),
            networks = response.networks.len(),
            "Catalog loaded"
        );
        Ok(response.into())
    }
}

impl From<CatalogResponse> for Catalog {
    fn from(resp: CatalogResponse) -> Self {
        Self::new(resp.exchanges, resp.networks)
    }
}
