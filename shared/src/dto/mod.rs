//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the swap REST API.
//!
//! ## Module Organization
//!
//! - [`swap`] - Swap records, statuses, ledger transactions, list filters
//! - [`catalog`] - Exchanges, networks and exchange currencies
//! - [`onramp`] - Fiat onramp session statuses and published transaction reports
//! - [`response`] - Response envelope shared by every endpoint
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/swaps?page=1&status=5
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "data": [
//!     {
//!       "id": "6f1c...",
//!       "source_exchange": "coinbase",
//!       "destination_network": "ARBITRUM_MAINNET",
//!       "source_network_asset": "ETH",
//!       "destination_network_asset": "ETH",
//!       "requested_amount": 0.25,
//!       "status": "completed",
//!       "transactions": [{ "type": "output", "amount": 0.2491 }]
//!     }
//!   ]
//! }
//! ```

pub mod catalog;
pub mod onramp;
pub mod response;
pub mod swap;

pub use catalog::*;
pub use onramp::*;
pub use response::*;
pub use swap::*;
