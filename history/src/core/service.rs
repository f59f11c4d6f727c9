//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{CatalogResponse, PublishedSwapTransactionStatus, StatusFilter, SwapRecord};

/// Trait for swap API operations
///
/// The history loader, the orchestrator and the onramp bridge only ever talk to the
/// API through this trait, so tests can substitute an in-memory implementation.
#[async_trait]
pub trait SwapApi: Send + Sync {
    /// Fetch one page of the user's swaps (1-based page number).
    ///
    /// The server fixes the page size at [`crate::history::PAGE_SIZE`]. `None` means no
    /// status filter.
    async fn get_swaps(&self, page: u32, status: Option<StatusFilter>) -> Result<Vec<SwapRecord>, String>;

    /// Fetch the exchange and network catalog
    async fn get_settings(&self) -> Result<CatalogResponse, String>;

    /// Report a transaction published for a swap by an external payment provider
    async fn set_swap_published_tx(
        &self,
        swap_id: &str,
        status: PublishedSwapTransactionStatus,
        transaction_id: &str,
    ) -> Result<(), String>;
}
