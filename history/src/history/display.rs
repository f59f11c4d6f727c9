//! # Swap Row Display Join
//!
//! Joins a [`SwapRecord`] with the [`Catalog`] to produce what a history table row
//! shows: source and destination endpoints, a destination network hint, status and
//! amount. Missing catalog entries become placeholders; nothing here fails.

use shared::{format_amount, SwapRecord, SwapStatus};

use crate::catalog::{Catalog, EndpointRef};

/// Text shown where a catalog entry could not be resolved.
pub const PLACEHOLDER: &str = "-";

/// Owned summary of a resolved endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSummary {
    pub internal_name: String,
    pub display_name: String,
    pub logo: Option<String>,
    pub is_exchange: bool,
}

impl From<EndpointRef<'_>> for EndpointSummary {
    fn from(endpoint: EndpointRef<'_>) -> Self {
        Self {
            internal_name: endpoint.internal_name().to_string(),
            display_name: endpoint.display_name().to_string(),
            logo: endpoint.logo().map(str::to_string),
            is_exchange: endpoint.is_exchange(),
        }
    }
}

/// One row of the swap history table
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRow {
    pub id: String,
    pub source: Option<EndpointSummary>,
    pub destination: Option<EndpointSummary>,
    /// Network the destination receives on; for exchange destinations this comes from
    /// the exchange's default currency for the source asset
    pub destination_network: Option<EndpointSummary>,
    pub status: SwapStatus,
    /// Settled output amount once completed, the requested amount otherwise
    pub amount: f64,
    pub asset: String,
}

impl SwapRow {
    pub fn build(record: &SwapRecord, catalog: &Catalog) -> Self {
        let source = catalog.resolve_endpoint(record.source_exchange.as_deref(), record.source_network.as_deref());
        let destination = catalog.resolve_endpoint(
            record.destination_exchange.as_deref(),
            record.destination_network.as_deref(),
        );

        let destination_network = match record.destination_network.as_deref() {
            Some(name) => catalog.network(name),
            None => record
                .destination_exchange
                .as_deref()
                .and_then(|name| catalog.exchange(name))
                .and_then(|exchange| catalog.default_currency(exchange, &record.source_network_asset))
                .and_then(|currency| currency.network.as_deref())
                .and_then(|network| catalog.network_ignore_case(network)),
        };

        let amount = record.settled_amount().unwrap_or(record.requested_amount);

        Self {
            id: record.id.clone(),
            source: source.map(EndpointSummary::from),
            destination: destination.map(EndpointSummary::from),
            destination_network: destination_network.map(|n| EndpointRef::Network(n).into()),
            status: record.status,
            amount,
            asset: record.destination_network_asset.clone(),
        }
    }

    pub fn source_label(&self) -> &str {
        self.source.as_ref().map(|e| e.display_name.as_str()).unwrap_or(PLACEHOLDER)
    }

    pub fn destination_label(&self) -> &str {
        self.destination
            .as_ref()
            .map(|e| e.display_name.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    /// Amount followed by the destination asset, e.g. `0.2491 ETH`
    pub fn amount_label(&self) -> String {
        if self.asset.is_empty() {
            format_amount(self.amount)
        } else {
            format!("{} {}", format_amount(self.amount), self.asset)
        }
    }
}

/// Build rows for a whole page of records, preserving order.
pub fn build_rows(records: &[SwapRecord], catalog: &Catalog) -> Vec<SwapRow> {
    records.iter().map(|r| SwapRow::build(r, catalog)).collect()
}
