//! # Fiat Onramp Session Bridge
//!
//! Glue between a swap and the third-party payment widget that funds it. The widget
//! itself is external; this module only tracks what the embedding needs:
//!
//! - whether a swap can host the widget at all (it needs a session client secret),
//! - the loading flag shown until the widget reports its UI is ready,
//! - turning session status updates into a published-transaction report
//!   `(swap_id, outcome, provider_session_id)` sent to the swap API.
//!
//! `fulfillment_complete` reports [`PublishedSwapTransactionStatus::Completed`] and
//! `fulfillment_processing` reports [`PublishedSwapTransactionStatus::Pending`]; every
//! other session status is ignored.

use std::sync::Arc;

use shared::{OnrampSessionStatus, PublishedSwapTransactionStatus, SwapRecord};

use crate::core::error::{AppError, Result};
use crate::core::service::SwapApi;

/// Event emitted by the embedded widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The widget finished rendering its UI
    UiLoaded,
    /// The payment session changed status
    SessionUpdated {
        session_id: String,
        status: OnrampSessionStatus,
    },
}

/// What gets published for a swap after a session update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub swap_id: String,
    pub outcome: PublishedSwapTransactionStatus,
    pub provider_session_id: String,
}

/// Published outcome for a provider session status, if it warrants one.
pub fn outcome_for(status: OnrampSessionStatus) -> Option<PublishedSwapTransactionStatus> {
    match status {
        OnrampSessionStatus::FulfillmentComplete => Some(PublishedSwapTransactionStatus::Completed),
        OnrampSessionStatus::FulfillmentProcessing => Some(PublishedSwapTransactionStatus::Pending),
        _ => None,
    }
}

/// Widget session mounted for one swap
#[derive(Debug, Clone)]
pub struct OnrampSession {
    swap_id: String,
    client_secret: String,
    loading: bool,
    last_reported: Option<PublishedSwapTransactionStatus>,
}

impl OnrampSession {
    /// Mount the widget for `swap`. `None` when the swap carries no session secret.
    pub fn mount(swap: &SwapRecord) -> Option<Self> {
        if swap.id.is_empty() {
            return None;
        }
        let client_secret = swap.onramp_session_secret()?;

        tracing::debug!(swap_id = %swap.id, "Onramp widget mounted");
        Some(Self {
            swap_id: swap.id.clone(),
            client_secret: client_secret.to_string(),
            loading: true,
            last_reported: None,
        })
    }

    pub fn swap_id(&self) -> &str {
        &self.swap_id
    }

    /// Secret handed to the widget to open the payment session
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Show a skeleton until the widget UI is ready
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Feed a widget event. Returns the report to publish, if any.
    ///
    /// The outcome only counts as reported once [`OnrampSession::mark_reported`] is
    /// called; until then the same status yields the same report again.
    pub fn handle(&mut self, event: WidgetEvent) -> Option<SessionReport> {
        match event {
            WidgetEvent::UiLoaded => {
                self.loading = false;
                None
            }
            WidgetEvent::SessionUpdated { session_id, status } => {
                let Some(outcome) = outcome_for(status) else {
                    tracing::debug!(swap_id = %self.swap_id, status = ?status, "Session status ignored");
                    return None;
                };
                if self.last_reported == Some(outcome) {
                    return None;
                }

                Some(SessionReport {
                    swap_id: self.swap_id.clone(),
                    outcome,
                    provider_session_id: session_id,
                })
            }
        }
    }

    /// Record that `outcome` reached the API. Repeats of it produce no further report.
    pub fn mark_reported(&mut self, outcome: PublishedSwapTransactionStatus) {
        self.last_reported = Some(outcome);
    }

    pub fn last_reported(&self) -> Option<PublishedSwapTransactionStatus> {
        self.last_reported
    }
}

/// Publishes [`SessionReport`]s through the swap API
pub struct OnrampBridge {
    api: Arc<dyn SwapApi>,
}

impl OnrampBridge {
    pub fn new(api: Arc<dyn SwapApi>) -> Self {
        Self { api }
    }

    pub async fn publish(&self, report: &SessionReport) -> Result<()> {
        self.api
            .set_swap_published_tx(&report.swap_id, report.outcome, &report.provider_session_id)
            .await
            .map_err(AppError::Api)?;

        tracing::info!(
            swap_id = %report.swap_id,
            outcome = ?report.outcome,
            session_id = %report.provider_session_id,
            "Onramp session outcome published"
        );
        Ok(())
    }

    /// Feed `event` to `session` and publish the resulting report, if any.
    ///
    /// A failed publish leaves the session untouched, so redelivering the same status
    /// retries it.
    pub async fn handle(&self, session: &mut OnrampSession, event: WidgetEvent) -> Result<Option<SessionReport>> {
        let Some(report) = session.handle(event) else {
            return Ok(None);
        };

        self.publish(&report).await?;
        session.mark_reported(report.outcome);
        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::loader::tests::MockSwapApi;
    use crate::history::state::tests::record;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{CatalogResponse, StatusFilter, ONRAMP_SESSION_METADATA_KEY};

    fn fundable_swap() -> SwapRecord {
        let mut swap = record("swap-42");
        swap.metadata
            .insert(ONRAMP_SESSION_METADATA_KEY.to_string(), "cos_secret".to_string());
        swap
    }

    fn update(status: OnrampSessionStatus) -> WidgetEvent {
        WidgetEvent::SessionUpdated {
            session_id: "cos_1".to_string(),
            status,
        }
    }

    #[test]
    fn test_processing_and_complete_are_distinct() {
        assert_eq!(
            outcome_for(OnrampSessionStatus::FulfillmentProcessing),
            Some(PublishedSwapTransactionStatus::Pending)
        );
        assert_eq!(
            outcome_for(OnrampSessionStatus::FulfillmentComplete),
            Some(PublishedSwapTransactionStatus::Completed)
        );
        assert_eq!(outcome_for(OnrampSessionStatus::RequiresPayment), None);
        assert_eq!(outcome_for(OnrampSessionStatus::Rejected), None);
    }

    #[test]
    fn test_mount_requires_session_secret() {
        assert!(OnrampSession::mount(&record("plain")).is_none());

        let session = OnrampSession::mount(&fundable_swap()).unwrap();
        assert_eq!(session.client_secret(), "cos_secret");
        assert!(session.is_loading());
    }

    #[test]
    fn test_session_flow() {
        let mut session = OnrampSession::mount(&fundable_swap()).unwrap();
        assert_eq!(session.handle(WidgetEvent::UiLoaded), None);
        assert!(!session.is_loading());

        assert_eq!(session.handle(update(OnrampSessionStatus::RequiresPayment)), None);

        let report = session.handle(update(OnrampSessionStatus::FulfillmentProcessing)).unwrap();
        assert_eq!(report.outcome, PublishedSwapTransactionStatus::Pending);
        assert_eq!(report.swap_id, "swap-42");
        assert_eq!(report.provider_session_id, "cos_1");

        // not yet committed: the same status reports again
        assert_eq!(session.handle(update(OnrampSessionStatus::FulfillmentProcessing)), Some(report.clone()));

        session.mark_reported(report.outcome);
        assert_eq!(session.handle(update(OnrampSessionStatus::FulfillmentProcessing)), None);

        let report = session.handle(update(OnrampSessionStatus::FulfillmentComplete)).unwrap();
        assert_eq!(report.outcome, PublishedSwapTransactionStatus::Completed);
    }

    /// Rejects the first `failures` publishes, then records them like the mock.
    struct FlakyPublishApi {
        inner: MockSwapApi,
        failures: Mutex<u32>,
    }

    #[async_trait]
    impl SwapApi for FlakyPublishApi {
        async fn get_swaps(
            &self,
            page: u32,
            status: Option<StatusFilter>,
        ) -> std::result::Result<Vec<SwapRecord>, String> {
            self.inner.get_swaps(page, status).await
        }

        async fn get_settings(&self) -> std::result::Result<CatalogResponse, String> {
            self.inner.get_settings().await
        }

        async fn set_swap_published_tx(
            &self,
            swap_id: &str,
            status: PublishedSwapTransactionStatus,
            transaction_id: &str,
        ) -> std::result::Result<(), String> {
            {
                let mut failures = self.failures.lock();
                if *failures > 0 {
                    *failures -= 1;
                    return Err("Server error (502)".to_string());
                }
            }
            self.inner.set_swap_published_tx(swap_id, status, transaction_id).await
        }
    }

    #[tokio::test]
    async fn test_failed_publish_is_retried_on_redelivery() {
        let api = Arc::new(FlakyPublishApi {
            inner: MockSwapApi::new(Vec::new()),
            failures: Mutex::new(1),
        });
        let bridge = OnrampBridge::new(api.clone());
        let mut session = OnrampSession::mount(&fundable_swap()).unwrap();

        let err = bridge
            .handle(&mut session, update(OnrampSessionStatus::FulfillmentComplete))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Api("Server error (502)".to_string()));
        assert_eq!(session.last_reported(), None);
        assert!(api.inner.published.lock().is_empty());

        let report = bridge
            .handle(&mut session, update(OnrampSessionStatus::FulfillmentComplete))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.outcome, PublishedSwapTransactionStatus::Completed);
        assert_eq!(session.last_reported(), Some(PublishedSwapTransactionStatus::Completed));
        assert_eq!(api.inner.published.lock().len(), 1);

        // delivered once more after success: nothing new is published
        assert!(bridge
            .handle(&mut session, update(OnrampSessionStatus::FulfillmentComplete))
            .await
            .unwrap()
            .is_none());
        assert_eq!(api.inner.published.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_bridge_publishes_report() {
        let api = Arc::new(MockSwapApi::new(Vec::new()));
        let bridge = OnrampBridge::new(api.clone());
        let mut session = OnrampSession::mount(&fundable_swap()).unwrap();

        let report = bridge
            .handle(&mut session, update(OnrampSessionStatus::FulfillmentComplete))
            .await
            .unwrap();
        assert!(report.is_some());
        assert!(bridge.handle(&mut session, WidgetEvent::UiLoaded).await.unwrap().is_none());

        let published = api.published.lock().clone();
        assert_eq!(
            published,
            vec![(
                "swap-42".to_string(),
                PublishedSwapTransactionStatus::Completed,
                "cos_1".to_string()
            )]
        );
    }
}
