use serde::{Deserialize, Serialize};

/// Status of a fiat onramp payment session, as reported by the provider widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OnrampSessionStatus {
    Initialized,
    Rejected,
    RequiresPayment,
    FulfillmentProcessing,
    FulfillmentComplete,
    #[serde(other)]
    Unknown,
}

/// Status of a user transaction published against a swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PublishedSwapTransactionStatus {
    Pending,
    Completed,
    Error,
}

/// Body of `POST /api/swaps/{id}/transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishSwapTransactionRequest {
    pub status: PublishedSwapTransactionStatus,
    pub transaction_id: String,
}
