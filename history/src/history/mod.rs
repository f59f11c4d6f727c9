//! # Swap History
//!
//! Incremental loading of the user's swap list.
//!
//! - **[`state`]**: [`PageState`] value and its pure transitions
//! - **[`loader`]**: [`PaginatedListLoader`], fetch helpers with timeouts, cancelled-swap probe
//! - **[`display`]**: Per-record join against the exchange/network catalog

pub mod display;
pub mod loader;
pub mod state;

pub use display::{build_rows, EndpointSummary, SwapRow};
pub use loader::{fetch_page, probe_has_cancelled, PaginatedListLoader};
pub use state::{PageOutcome, PageRequest, PageState, ViewPhase, PAGE_SIZE};
