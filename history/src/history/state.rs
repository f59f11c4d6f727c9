//! # Page State
//!
//! The paginated list-loading state machine.
//!
//! [`PageState`] is a plain value; every transition consumes it and returns the next
//! value. Transitions never perform I/O: [`PageState::begin_first_load`] and
//! [`PageState::begin_next_page`] hand back a [`PageRequest`] describing the fetch
//! to issue, and the fetch result is fed back later through [`PageState::apply`].
//!
//! ```text
//!            begin_first_load(f)                 apply(ok, len < 20)
//!  Idle ─────────────────────────► Loading ───────────────────────────► LastPage
//!   ▲                                 │  ▲                                  │
//!   │          apply(err)             │  │ begin_next_page                  │
//!   └─────────────────────────────────┘  │                                  │
//!                                   apply(ok, len == 20) ──► Idle ──────────┘
//! ```
//!
//! Every request is tagged with the session token, filter and page number it was
//! issued for. A result whose tag is not the current in-flight request is stale
//! (superseded by a filter change or a reload) and is dropped without touching state.

use shared::{StatusFilter, SwapRecord};

use crate::core::error::AppError;

/// Number of records per page. Fixed by the server.
pub const PAGE_SIZE: usize = 20;

/// Descriptor of one outbound page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Session the request belongs to; bumped on every reload and filter change
    pub session: u64,
    pub filter: StatusFilter,
    /// 1-based page number
    pub page: u32,
}

/// What [`PageState::apply`] did with a fetch result
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Records were stored; `received` is the size of the fetched page
    Applied { received: usize },
    /// The fetch failed; nothing but the loading flag changed
    Failed(AppError),
    /// The result belonged to a superseded request and was dropped
    Stale,
}

/// How a rendering layer should present the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing loaded yet and the first page is on its way
    Skeleton,
    /// No records to show
    Empty,
    Table,
}

/// Accumulated swap list for one filter session
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    current_page: u32,
    records: Vec<SwapRecord>,
    is_last_page: bool,
    is_loading: bool,
    filter: StatusFilter,
    session: u64,
    in_flight: Option<PageRequest>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(StatusFilter::default())
    }
}

impl PageState {
    pub fn new(filter: StatusFilter) -> Self {
        Self {
            current_page: 0,
            records: Vec::new(),
            is_last_page: false,
            is_loading: false,
            filter,
            session: 0,
            in_flight: None,
        }
    }

    /// Number of the last page stored (0 before the first page arrives)
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn records(&self) -> &[SwapRecord] {
        &self.records
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn in_flight(&self) -> Option<PageRequest> {
        self.in_flight
    }

    /// Whether a "load more" request would be issued right now.
    pub fn can_load_more(&self) -> bool {
        !self.is_last_page && !self.is_loading
    }

    pub fn phase(&self) -> ViewPhase {
        if self.current_page == 0 && self.is_loading {
            ViewPhase::Skeleton
        } else if self.records.is_empty() {
            ViewPhase::Empty
        } else {
            ViewPhase::Table
        }
    }

    pub fn find(&self, swap_id: &str) -> Option<&SwapRecord> {
        self.records.iter().find(|r| r.id == swap_id)
    }

    /// Start a fresh session under `filter`: no records, page 0, nothing in flight.
    pub fn with_filter(self, filter: StatusFilter) -> Self {
        Self {
            filter,
            session: self.session.wrapping_add(1),
            ..Self::new(filter)
        }
    }

    /// Request page 1 under `filter`.
    ///
    /// A different filter resets the list before the request is issued. Reloading the
    /// same filter keeps the current records until the new page 1 arrives, so a failed
    /// reload leaves them in place. Either way any request already in flight becomes stale.
    pub fn begin_first_load(self, filter: StatusFilter) -> (Self, PageRequest) {
        let mut next = if filter != self.filter {
            self.with_filter(filter)
        } else {
            Self {
                session: self.session.wrapping_add(1),
                ..self
            }
        };

        let request = PageRequest {
            session: next.session,
            filter,
            page: 1,
        };
        next.is_loading = true;
        next.in_flight = Some(request);
        (next, request)
    }

    /// Request the page after `current_page`.
    ///
    /// Returns no request, and the state unchanged, while a fetch is in flight or once
    /// the last page has been seen.
    pub fn begin_next_page(self) -> (Self, Option<PageRequest>) {
        if !self.can_load_more() {
            return (self, None);
        }

        let request = PageRequest {
            session: self.session,
            filter: self.filter,
            page: self.current_page + 1,
        };
        let next = Self {
            is_loading: true,
            in_flight: Some(request),
            ..self
        };
        (next, Some(request))
    }

    /// Feed back the result of `request`.
    pub fn apply(self, request: PageRequest, result: Result<Vec<SwapRecord>, AppError>) -> (Self, PageOutcome) {
        if self.in_flight != Some(request) {
            return (self, PageOutcome::Stale);
        }

        let mut next = Self {
            is_loading: false,
            in_flight: None,
            ..self
        };

        match result {
            Ok(page) => {
                let received = page.len();
                if request.page == 1 {
                    next.records = page;
                } else {
                    next.records.extend(page);
                }
                next.current_page = request.page;
                next.is_last_page = received < PAGE_SIZE;
                (next, PageOutcome::Applied { received })
            }
            Err(err) => (next, PageOutcome::Failed(err)),
        }
    }

    /// Drop whatever is in flight and clear the loading flag.
    ///
    /// Used when the fetch future was abandoned; a late result will be treated as stale.
    pub fn abandon(self) -> Self {
        Self {
            session: self.session.wrapping_add(1),
            is_loading: false,
            in_flight: None,
            ..self
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::SwapStatus;

    pub(crate) fn record(id: impl Into<String>) -> SwapRecord {
        SwapRecord {
            id: id.into(),
            source_exchange: None,
            source_network: Some("ETHEREUM_MAINNET".to_string()),
            destination_exchange: None,
            destination_network: Some("ARBITRUM_MAINNET".to_string()),
            source_network_asset: "ETH".to_string(),
            destination_network_asset: "ETH".to_string(),
            requested_amount: 0.1,
            status: SwapStatus::Completed,
            transactions: Vec::new(),
            metadata: Default::default(),
            created_date: None,
        }
    }

    pub(crate) fn page_of(prefix: &str, len: usize) -> Vec<SwapRecord> {
        (0..len).map(|i| record(format!("{}-{}", prefix, i))).collect()
    }

    #[test]
    fn test_first_load_full_page_is_not_last() {
        let (state, request) = PageState::new(StatusFilter::Active).begin_first_load(StatusFilter::Active);
        assert!(state.is_loading());
        assert_eq!(request.page, 1);
        assert_eq!(state.phase(), ViewPhase::Skeleton);

        let (state, outcome) = state.apply(request, Ok(page_of("a", PAGE_SIZE)));
        assert_eq!(outcome, PageOutcome::Applied { received: PAGE_SIZE });
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.records().len(), PAGE_SIZE);
        assert!(!state.is_last_page());
        assert!(!state.is_loading());
        assert_eq!(state.phase(), ViewPhase::Table);
    }

    #[test]
    fn test_twenty_then_five_ends_on_last_page() {
        let (state, first) = PageState::default().begin_first_load(StatusFilter::Active);
        let (state, _) = state.apply(first, Ok(page_of("p1", 20)));

        let (state, second) = state.begin_next_page();
        let second = second.unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(second.filter, StatusFilter::Active);

        let (state, outcome) = state.apply(second, Ok(page_of("p2", 5)));
        assert_eq!(outcome, PageOutcome::Applied { received: 5 });
        assert_eq!(state.records().len(), 25);
        assert_eq!(state.current_page(), 2);
        assert!(state.is_last_page());

        // order preserved across pages
        assert_eq!(state.records()[0].id, "p1-0");
        assert_eq!(state.records()[20].id, "p2-0");
        assert_eq!(state.records()[24].id, "p2-4");
    }

    #[test]
    fn test_next_page_is_noop_while_loading() {
        let (state, _) = PageState::default().begin_first_load(StatusFilter::Active);
        let before = state.clone();
        let (state, request) = state.begin_next_page();
        assert!(request.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_next_page_is_noop_on_last_page() {
        let (state, first) = PageState::default().begin_first_load(StatusFilter::All);
        let (state, _) = state.apply(first, Ok(page_of("a", 3)));
        assert!(state.is_last_page());

        let before = state.clone();
        let (state, request) = state.begin_next_page();
        assert!(request.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_next_page_error_keeps_records_and_allows_retry() {
        let (state, first) = PageState::default().begin_first_load(StatusFilter::Active);
        let (state, _) = state.apply(first, Ok(page_of("a", 20)));

        let (state, second) = state.begin_next_page();
        let second = second.unwrap();
        let (state, outcome) = state.apply(second, Err(AppError::Api("Internal server error".to_string())));

        assert_eq!(outcome, PageOutcome::Failed(AppError::Api("Internal server error".to_string())));
        assert_eq!(state.records().len(), 20);
        assert_eq!(state.current_page(), 1);
        assert!(!state.is_loading());
        assert!(!state.is_last_page());

        // retry asks for the same page again
        let (_, retry) = state.begin_next_page();
        assert_eq!(retry.unwrap().page, 2);
    }

    #[test]
    fn test_first_load_error_leaves_previous_records() {
        let (state, first) = PageState::default().begin_first_load(StatusFilter::Active);
        let (state, _) = state.apply(first, Ok(page_of("a", 20)));

        let (state, reload) = state.begin_first_load(StatusFilter::Active);
        assert_eq!(state.records().len(), 20);
        let (state, outcome) = state.apply(reload, Err(AppError::Timeout(std::time::Duration::from_secs(10))));

        assert!(matches!(outcome, PageOutcome::Failed(AppError::Timeout(_))));
        assert_eq!(state.records().len(), 20);
        assert_eq!(state.current_page(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_filter_change_resets_before_fetch() {
        let (state, first) = PageState::default().begin_first_load(StatusFilter::Active);
        let (state, _) = state.apply(first, Ok(page_of("a", 20)));
        let (state, second) = state.begin_next_page();
        let (state, _) = state.apply(second.unwrap(), Ok(page_of("b", 20)));
        assert_eq!(state.current_page(), 2);

        let (state, request) = state.begin_first_load(StatusFilter::All);
        assert!(state.records().is_empty());
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.filter(), StatusFilter::All);
        assert_eq!(request.filter, StatusFilter::All);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_stale_response_after_filter_change_is_dropped() {
        let (state, active_request) = PageState::default().begin_first_load(StatusFilter::Active);
        let (state, all_request) = state.begin_first_load(StatusFilter::All);

        let before = state.clone();
        let (state, outcome) = state.apply(active_request, Ok(page_of("active", 20)));
        assert_eq!(outcome, PageOutcome::Stale);
        assert_eq!(state, before);
        assert!(state.is_loading());

        let (state, outcome) = state.apply(all_request, Ok(page_of("all", 4)));
        assert_eq!(outcome, PageOutcome::Applied { received: 4 });
        assert!(state.records().iter().all(|r| r.id.starts_with("all-")));
    }

    #[test]
    fn test_stale_next_page_after_reload_is_dropped() {
        let (state, first) = PageState::default().begin_first_load(StatusFilter::Active);
        let (state, _) = state.apply(first, Ok(page_of("a", 20)));
        let (state, next) = state.begin_next_page();
        let (state, reload) = state.begin_first_load(StatusFilter::Active);

        let (state, outcome) = state.apply(next.unwrap(), Ok(page_of("late", 20)));
        assert_eq!(outcome, PageOutcome::Stale);

        let (state, _) = state.apply(reload, Ok(page_of("fresh", 20)));
        assert_eq!(state.records().len(), 20);
        assert_eq!(state.records()[0].id, "fresh-0");
    }

    #[test]
    fn test_abandon_clears_loading() {
        let (state, request) = PageState::default().begin_first_load(StatusFilter::Active);
        let state = state.abandon();
        assert!(!state.is_loading());
        assert_eq!(state.phase(), ViewPhase::Empty);

        let (_, outcome) = state.apply(request, Ok(page_of("late", 1)));
        assert_eq!(outcome, PageOutcome::Stale);
    }
}
