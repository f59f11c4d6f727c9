//! # History Events
//!
//! Results of background fetches, sent from tokio tasks back to the orchestrator.

use shared::SwapRecord;

use crate::core::error::AppError;
use crate::history::PageRequest;

/// Async task results delivered to [`crate::app::HistoryApp::on_tick`]
#[derive(Debug, Clone)]
pub enum HistoryEvent {
    /// A page fetch finished; `request` is the tag it was issued with
    PageResult {
        request: PageRequest,
        result: Result<Vec<SwapRecord>, AppError>,
    },
    /// The cancelled-swap probe finished
    CancelledProbeResult(Result<bool, AppError>),
}
