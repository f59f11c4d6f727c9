use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata key holding the onramp provider's client secret for a swap.
pub const ONRAMP_SESSION_METADATA_KEY: &str = "STRIPE:SessionId";

/// Lifecycle status of a swap as reported by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    /// Waiting for the user's deposit
    UserTransferPending,
    /// The user's deposit arrived but is slower than expected
    UserTransferDelayed,
    /// Waiting for the payout transfer
    LsTransferPending,
    Completed,
    Failed,
    Expired,
    Cancelled,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl SwapStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SwapStatus::UserTransferPending => "Pending",
            SwapStatus::UserTransferDelayed => "Delayed",
            SwapStatus::LsTransferPending => "Processing",
            SwapStatus::Completed => "Completed",
            SwapStatus::Failed => "Failed",
            SwapStatus::Expired => "Expired",
            SwapStatus::Cancelled => "Cancelled",
            SwapStatus::Unknown => "Unknown",
        }
    }
}

/// Direction of a ledger transaction attached to a swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Input,
    Output,
    Refuel,
    #[serde(other)]
    Unknown,
}

/// Ledger transaction attached to a swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// A single swap as listed by `GET /api/swaps`.
///
/// Source and destination are each named either by an exchange or by a network
/// internal name; the exchange takes precedence when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_network: Option<String>,
    #[serde(default)]
    pub source_network_asset: String,
    #[serde(default)]
    pub destination_network_asset: String,
    pub requested_amount: f64,
    pub status: SwapStatus,
    #[serde(default)]
    pub transactions: Vec<SwapTransaction>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

impl SwapRecord {
    /// First ledger transaction of the given type.
    pub fn transaction(&self, kind: TransactionType) -> Option<&SwapTransaction> {
        self.transactions.iter().find(|t| t.kind == kind)
    }

    /// Amount delivered to the destination. Only reported once the swap completed.
    pub fn settled_amount(&self) -> Option<f64> {
        if self.status != SwapStatus::Completed {
            return None;
        }
        self.transaction(TransactionType::Output).and_then(|t| t.amount)
    }

    /// Client secret of the onramp payment session bound to this swap, if any.
    pub fn onramp_session_secret(&self) -> Option<&str> {
        self.metadata
            .get(ONRAMP_SESSION_METADATA_KEY)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Server-side status filter for swap listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Everything except cancelled and expired swaps
    #[default]
    Active,
    All,
    /// Only cancelled swaps; used to decide whether the "show all" toggle is offered
    CancelledOnly,
}

impl StatusFilter {
    /// Numeric `status` query parameter understood by the API, `None` for no filter.
    pub fn wire_code(&self) -> Option<u8> {
        match self {
            StatusFilter::Active => Some(5),
            StatusFilter::All => None,
            StatusFilter::CancelledOnly => Some(4),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Active => "active",
            StatusFilter::All => "all",
            StatusFilter::CancelledOnly => "cancelled-only",
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(StatusFilter::Active),
            "all" => Ok(StatusFilter::All),
            "cancelled-only" | "cancelled_only" | "cancelled" => Ok(StatusFilter::CancelledOnly),
            other => Err(format!("unknown status filter '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_swap() -> SwapRecord {
        serde_json::from_str(
            r#"{
                "id": "swap-1",
                "source_exchange": "coinbase",
                "destination_network": "ARBITRUM_MAINNET",
                "source_network_asset": "ETH",
                "destination_network_asset": "ETH",
                "requested_amount": 0.25,
                "status": "completed",
                "transactions": [
                    { "type": "input", "amount": 0.25 },
                    { "type": "output", "amount": 0.2491 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_settled_amount_only_when_completed() {
        let mut swap = completed_swap();
        assert_eq!(swap.settled_amount(), Some(0.2491));

        swap.status = SwapStatus::LsTransferPending;
        assert_eq!(swap.settled_amount(), None);
    }

    #[test]
    fn test_unknown_status_does_not_fail_decoding() {
        let swap: SwapRecord = serde_json::from_str(
            r#"{ "id": "x", "requested_amount": 1.0, "status": "pending_refund" }"#,
        )
        .unwrap();
        assert_eq!(swap.status, SwapStatus::Unknown);
        assert!(swap.transactions.is_empty());
        assert!(swap.source_exchange.is_none());
    }

    #[test]
    fn test_onramp_session_secret() {
        let mut swap = completed_swap();
        assert_eq!(swap.onramp_session_secret(), None);

        swap.metadata
            .insert(ONRAMP_SESSION_METADATA_KEY.to_string(), "cos_123_secret".to_string());
        assert_eq!(swap.onramp_session_secret(), Some("cos_123_secret"));

        swap.metadata.insert(ONRAMP_SESSION_METADATA_KEY.to_string(), String::new());
        assert_eq!(swap.onramp_session_secret(), None);
    }

    #[test]
    fn test_status_filter_wire_codes() {
        assert_eq!(StatusFilter::Active.wire_code(), Some(5));
        assert_eq!(StatusFilter::CancelledOnly.wire_code(), Some(4));
        assert_eq!(StatusFilter::All.wire_code(), None);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(" active ".parse::<StatusFilter>(), Ok(StatusFilter::Active));
        assert_eq!("cancelled-only".parse::<StatusFilter>(), Ok(StatusFilter::CancelledOnly));
        assert!("expired".parse::<StatusFilter>().is_err());
    }
}
