//! # History Orchestrator
//!
//! [`HistoryApp`] connects a rendering layer to the paginated loader.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Rendering layer                          │
//! │  request_first_load / request_load_more / set_show_all   │
//! │  select_swap / close_details / snapshot / rows           │
//! └────────────┬─────────────────────────────▲───────────────┘
//!              │                             │ on_tick()
//! ┌────────────▼────────────┐   ┌────────────┴───────────────┐
//! │ Arc<RwLock<ViewState>>  │◄──│ event_handler (apply)      │
//! └────────────┬────────────┘   └────────────▲───────────────┘
//!              │ PageRequest                 │ async_channel
//! ┌────────────▼─────────────────────────────┴───────────────┐
//! │              tokio tasks (fetch_page, probe)             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests run the pure [`PageState`] transition under the lock, then spawn the fetch.
//! Results come back as [`HistoryEvent`]s and are applied in [`HistoryApp::on_tick`];
//! a result tagged for a superseded request is dropped there.

mod event_handler;
mod events;
mod state;
mod tasks;

pub use events::HistoryEvent;
pub use state::{HistoryViewState, Notification, SelectedSwap};

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::StatusFilter;

use crate::catalog::Catalog;
use crate::core::service::SwapApi;
use crate::history::{build_rows, PageState, SwapRow};

/// Swap history view controller
pub struct HistoryApp {
    /// Shared view state. Lock briefly; never hold across an await.
    pub state: Arc<RwLock<HistoryViewState>>,
    /// Results of background fetches, drained by [`HistoryApp::on_tick`]
    pub event_rx: Receiver<HistoryEvent>,
    event_tx: Sender<HistoryEvent>,
    api: Arc<dyn SwapApi>,
    catalog: Arc<Catalog>,
    fetch_timeout: Duration,
}

impl HistoryApp {
    pub fn new(api: Arc<dyn SwapApi>, catalog: Arc<Catalog>, fetch_timeout: Duration) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(HistoryViewState::default())),
            event_rx,
            event_tx,
            api,
            catalog,
            fetch_timeout,
        }
    }

    /// View mounted: probe for cancelled swaps and load the first page of active swaps.
    pub fn mount(&self) {
        tasks::probe_cancelled(self.api.clone(), self.fetch_timeout, self.event_tx.clone());
        self.request_first_load(StatusFilter::Active);
    }

    /// Load page 1 under `filter`, replacing the list once it arrives.
    pub fn request_first_load(&self, filter: StatusFilter) {
        let request = {
            let mut state = self.state.write();
            let page = std::mem::take(&mut state.page);
            let (page, request) = page.begin_first_load(filter);
            state.page = page;
            request
        };

        tracing::info!(session = request.session, filter = %filter, "First page requested");
        tasks::fetch_history_page(self.api.clone(), request, self.fetch_timeout, self.event_tx.clone());
    }

    /// Load the next page. Returns `false` when nothing was requested (already loading
    /// or at the last page).
    pub fn request_load_more(&self) -> bool {
        let request = {
            let mut state = self.state.write();
            let page = std::mem::take(&mut state.page);
            let (page, request) = page.begin_next_page();
            state.page = page;
            request
        };

        match request {
            Some(request) => {
                tracing::info!(session = request.session, page = request.page, "Next page requested");
                tasks::fetch_history_page(self.api.clone(), request, self.fetch_timeout, self.event_tx.clone());
                true
            }
            None => false,
        }
    }

    /// Switch filters. Selecting the filter already active does nothing.
    pub fn request_filter_change(&self, filter: StatusFilter) {
        if self.state.read().page.filter() == filter {
            return;
        }
        self.request_first_load(filter);
    }

    /// The "show all swaps" toggle.
    pub fn set_show_all(&self, show_all: bool) {
        let filter = if show_all { StatusFilter::All } else { StatusFilter::Active };
        self.request_filter_change(filter);
    }

    /// Open the details view for a listed swap. Returns `false` for an unknown id.
    pub fn select_swap(&self, swap_id: &str) -> bool {
        let mut state = self.state.write();
        let selected = state.page.find(swap_id).map(|record| SelectedSwap {
            id: record.id.clone(),
            status: record.status,
        });

        match selected {
            Some(selected) => {
                state.selected = Some(selected);
                state.details_open = true;
                true
            }
            None => false,
        }
    }

    pub fn close_details(&self) {
        self.state.write().details_open = false;
    }

    /// Apply every pending async result. Returns how many were processed.
    pub fn on_tick(&self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Wait for the next async result and apply it. Returns `false` once no task can
    /// send anymore.
    pub async fn process_next_event(&self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Read-only copy of the list state
    pub fn snapshot(&self) -> PageState {
        self.state.read().page.clone()
    }

    /// Table rows for the current records
    pub fn rows(&self) -> Vec<SwapRow> {
        build_rows(self.state.read().page.records(), &self.catalog)
    }

    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }
}
