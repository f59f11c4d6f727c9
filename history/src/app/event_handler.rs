//! # Event Handler
//!
//! Applies [`HistoryEvent`]s from background tasks to the view state.
//!
//! The write lock is taken once per event and released before returning; no lock is
//! ever held across an await.

use shared::SwapRecord;

use crate::app::events::HistoryEvent;
use crate::app::state::Notification;
use crate::app::HistoryApp;
use crate::core::error::AppError;
use crate::history::{PageOutcome, PageRequest};

impl HistoryApp {
    /// Apply one async result.
    pub fn handle_event(&self, event: HistoryEvent) {
        match event {
            HistoryEvent::PageResult { request, result } => {
                self.handle_page_result(request, result);
            }
            HistoryEvent::CancelledProbeResult(result) => {
                self.handle_cancelled_probe_result(result);
            }
        }
    }

    fn handle_page_result(&self, request: PageRequest, result: Result<Vec<SwapRecord>, AppError>) {
        let mut state = self.state.write();
        let page = std::mem::take(&mut state.page);
        let (page, outcome) = page.apply(request, result);
        state.page = page;

        match outcome {
            PageOutcome::Applied { received } => {
                tracing::info!(
                    event = "PageResult",
                    session = request.session,
                    filter = %request.filter,
                    page = request.page,
                    received = received,
                    total = state.page.records().len(),
                    last_page = state.page.is_last_page(),
                    "Swap page applied"
                );
            }
            PageOutcome::Failed(err) => {
                tracing::warn!(
                    event = "PageResult",
                    filter = %request.filter,
                    page = request.page,
                    error = %err,
                    "Swap page failed"
                );
                state.pending_notifications.push(Notification::error(err.user_message()));
            }
            PageOutcome::Stale => {
                tracing::debug!(
                    event = "PageResult",
                    session = request.session,
                    current_session = state.page.session(),
                    filter = %request.filter,
                    page = request.page,
                    "Stale page result discarded"
                );
            }
        }
    }

    fn handle_cancelled_probe_result(&self, result: Result<bool, AppError>) {
        match result {
            Ok(has_cancelled) => {
                tracing::debug!(event = "CancelledProbeResult", has_cancelled, "Cancelled swap probe finished");
                if has_cancelled {
                    self.state.write().show_toggle = true;
                }
            }
            // The toggle simply stays hidden
            Err(err) => tracing::warn!(event = "CancelledProbeResult", error = %err, "Cancelled swap probe failed"),
        }
    }
}
