//! # Paginated List Loader
//!
//! Sequential driver for [`PageState`]: issues one fetch at a time against a
//! [`SwapApi`], bounds every fetch with a timeout, and feeds the result back into
//! the state machine.
//!
//! The event-driven orchestrator in [`crate::app`] uses the same [`fetch_page`] and
//! [`probe_has_cancelled`] helpers but delivers results as events instead of awaiting
//! them in place.

use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::{StatusFilter, SwapRecord};

use crate::core::error::{AppError, Result};
use crate::core::service::SwapApi;

use super::state::{PageOutcome, PageRequest, PageState};

/// Fetch the page described by `request`, giving up after `timeout`.
pub async fn fetch_page(api: &dyn SwapApi, request: PageRequest, timeout: Duration) -> Result<Vec<SwapRecord>> {
    let start = Instant::now();
    let status = match request.filter {
        StatusFilter::All => None,
        other => Some(other),
    };

    let result = match tokio::time::timeout(timeout, api.get_swaps(request.page, status)).await {
        Ok(Ok(records)) => Ok(records),
        Ok(Err(message)) => Err(AppError::Api(message)),
        Err(_) => Err(AppError::Timeout(timeout)),
    };

    match &result {
        Ok(records) => tracing::debug!(
            session = request.session,
            filter = %request.filter,
            page = request.page,
            count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "Page fetched"
        ),
        Err(e) => tracing::warn!(
            session = request.session,
            filter = %request.filter,
            page = request.page,
            error = %e,
            duration_ms = start.elapsed().as_millis(),
            "Page fetch failed"
        ),
    }
    result
}

/// Whether the user has any cancelled swap.
///
/// One page-1 request under [`StatusFilter::CancelledOnly`]; decides whether the
/// "show all swaps" toggle is offered. Never touches a [`PageState`].
pub async fn probe_has_cancelled(api: &dyn SwapApi, timeout: Duration) -> Result<bool> {
    let request = PageRequest {
        session: 0,
        filter: StatusFilter::CancelledOnly,
        page: 1,
    };
    let records = fetch_page(api, request, timeout).await?;
    Ok(!records.is_empty())
}

/// Loads a filtered swap list page by page.
///
/// Each method awaits its own fetch, so calls on one loader are naturally serialized.
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # use shared::StatusFilter;
/// # use swap_history::history::PaginatedListLoader;
/// # use swap_history::services::api::ApiClient;
/// # async fn run() -> swap_history::Result<()> {
/// let api = Arc::new(ApiClient::new("https://api.layerswap.io", Duration::from_secs(10)));
/// let mut loader = PaginatedListLoader::new(api, Duration::from_secs(10));
///
/// loader.load_first_page(StatusFilter::Active).await?;
/// while !loader.state().is_last_page() {
///     loader.load_next_page().await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedListLoader {
    api: Arc<dyn SwapApi>,
    timeout: Duration,
    state: PageState,
}

impl PaginatedListLoader {
    pub fn new(api: Arc<dyn SwapApi>, timeout: Duration) -> Self {
        Self {
            api,
            timeout,
            state: PageState::default(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Replace the list with page 1 under `filter`.
    ///
    /// On error the previous records stay in place and only the loading flag is cleared.
    pub async fn load_first_page(&mut self, filter: StatusFilter) -> Result<&PageState> {
        let (next, request) = std::mem::take(&mut self.state).begin_first_load(filter);
        self.state = next;
        self.complete(request).await
    }

    /// Append the next page.
    ///
    /// A no-op once the last page was seen. On error nothing is appended and the same
    /// page is requested again by the next call.
    ///
    /// # Errors
    ///
    /// [`AppError::State`] when an earlier fetch was dropped while in flight and
    /// [`PaginatedListLoader::cancel`] was not called; the state is left unchanged.
    pub async fn load_next_page(&mut self) -> Result<&PageState> {
        if let Some(pending) = self.state.in_flight() {
            return Err(AppError::State(format!(
                "page {} is still in flight; cancel it before loading more",
                pending.page
            )));
        }

        let (next, request) = std::mem::take(&mut self.state).begin_next_page();
        self.state = next;
        match request {
            Some(request) => self.complete(request).await,
            None => Ok(&self.state),
        }
    }

    /// First page under `filter`, then further pages until the last page or `max_pages`.
    pub async fn load_pages(&mut self, filter: StatusFilter, max_pages: u32) -> Result<&PageState> {
        self.load_first_page(filter).await?;
        while !self.state.is_last_page() && self.state.current_page() < max_pages {
            self.load_next_page().await?;
        }
        Ok(&self.state)
    }

    /// Recover after a load future was dropped mid-fetch (e.g. raced against a
    /// shutdown signal). Clears the loading flag so loading can resume.
    pub fn cancel(&mut self) {
        if self.state.is_loading() {
            tracing::debug!(request = ?self.state.in_flight(), "Abandoning in-flight page");
            self.state = std::mem::take(&mut self.state).abandon();
        }
    }

    pub async fn probe_has_cancelled(&self) -> Result<bool> {
        probe_has_cancelled(self.api.as_ref(), self.timeout).await
    }

    async fn complete(&mut self, request: PageRequest) -> Result<&PageState> {
        let result = fetch_page(self.api.as_ref(), request, self.timeout).await;
        let (next, outcome) = std::mem::take(&mut self.state).apply(request, result);
        self.state = next;

        match outcome {
            PageOutcome::Applied { received } => {
                tracing::info!(
                    filter = %request.filter,
                    page = request.page,
                    received = received,
                    total = self.state.records().len(),
                    last_page = self.state.is_last_page(),
                    "Swap page applied"
                );
                Ok(&self.state)
            }
            PageOutcome::Failed(err) => Err(err),
            PageOutcome::Stale => Ok(&self.state),
        }
    }
}
