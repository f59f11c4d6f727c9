//! # Async Tasks
//!
//! Spawns fetches on the tokio runtime; each sends exactly one [`HistoryEvent`].

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use tokio::spawn;
use tokio::task::JoinHandle;

use crate::app::events::HistoryEvent;
use crate::core::service::SwapApi;
use crate::history::{fetch_page, probe_has_cancelled, PageRequest};

/// Fetch the page described by `request` and report it as [`HistoryEvent::PageResult`].
pub(crate) fn fetch_history_page(
    api: Arc<dyn SwapApi>,
    request: PageRequest,
    timeout: Duration,
    event_tx: Sender<HistoryEvent>,
) -> JoinHandle<()> {
    spawn(async move {
        let result = fetch_page(api.as_ref(), request, timeout).await;
        if event_tx.send(HistoryEvent::PageResult { request, result }).await.is_err() {
            tracing::debug!(page = request.page, "History view gone, page result dropped");
        }
    })
}

/// Probe for cancelled swaps and report it as [`HistoryEvent::CancelledProbeResult`].
pub(crate) fn probe_cancelled(
    api: Arc<dyn SwapApi>,
    timeout: Duration,
    event_tx: Sender<HistoryEvent>,
) -> JoinHandle<()> {
    spawn(async move {
        let result = probe_has_cancelled(api.as_ref(), timeout).await;
        if event_tx.send(HistoryEvent::CancelledProbeResult(result)).await.is_err() {
            tracing::debug!("History view gone, cancelled probe result dropped");
        }
    })
}
