//! # View State
//!
//! Everything a swap history view renders, held behind the orchestrator's lock.

use shared::{StatusFilter, SwapStatus};

use crate::history::PageState;

/// Error toast waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Swap opened in the details view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSwap {
    pub id: String,
    pub status: SwapStatus,
}

impl SelectedSwap {
    /// Only swaps still waiting for the user's deposit can be reopened.
    pub fn can_resume(&self) -> bool {
        self.status == SwapStatus::UserTransferPending
    }

    /// Route of the swap page, when the swap can be resumed
    pub fn resume_path(&self) -> Option<String> {
        self.can_resume().then(|| format!("/swap/{}", self.id))
    }
}

/// Swap history view state
#[derive(Debug, Clone, Default)]
pub struct HistoryViewState {
    /// Paginated list for the active filter
    pub page: PageState,
    /// The user has cancelled swaps, so the all/active toggle is offered
    pub show_toggle: bool,
    /// Details view
    pub selected: Option<SelectedSwap>,
    pub details_open: bool,
    /// Notifications not yet shown
    pub pending_notifications: Vec<Notification>,
}

impl HistoryViewState {
    pub fn show_all(&self) -> bool {
        self.page.filter() == StatusFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_user_transfer_can_resume() {
        let selected = SelectedSwap {
            id: "abc".to_string(),
            status: SwapStatus::UserTransferPending,
        };
        assert_eq!(selected.resume_path().as_deref(), Some("/swap/abc"));

        let selected = SelectedSwap {
            id: "abc".to_string(),
            status: SwapStatus::Completed,
        };
        assert!(!selected.can_resume());
        assert_eq!(selected.resume_path(), None);
    }
}
