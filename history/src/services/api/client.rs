//! # API Client
//!
//! Main HTTP client for swap API communication.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{ApiResponse, CatalogResponse, PublishedSwapTransactionStatus, StatusFilter, SwapRecord};

use crate::core::service::SwapApi;

/// HTTP client for the swap REST API.
///
/// Holds one connection pool for the whole process; clone the surrounding `Arc`
/// rather than the client.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    access_token: Option<String>,
}

/// Slack between the caller's fetch bound and the transport timeout.
pub(crate) const TRANSPORT_TIMEOUT_GRACE: Duration = Duration::from_secs(5);

/// Transport-level timeout for a client whose callers bound fetches by `fetch_timeout`.
///
/// Always above the fetch bound: an expired fetch is reported by the caller as
/// `AppError::Timeout`, not by reqwest as a network error.
pub(crate) fn transport_timeout(fetch_timeout: Duration) -> Duration {
    fetch_timeout + TRANSPORT_TIMEOUT_GRACE
}

impl ApiClient {
    /// Create a client for callers that bound each fetch by `fetch_timeout`.
    ///
    /// The connection itself is only abandoned a few seconds later, as a backstop for
    /// requests nobody is awaiting with a deadline.
    pub fn new(base_url: impl Into<String>, fetch_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(transport_timeout(fetch_timeout))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and unwrap the `{ data } | { error }` envelope.
    ///
    /// Non-success statuses still carry the envelope most of the time; when they do
    /// not, the status code is reported instead.
    pub(crate) async fn send_enveloped<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, String> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(envelope) if status.is_success() => envelope.into_result(),
            Ok(envelope) => match envelope.error {
                Some(err) => Err(err.message),
                None => Err(format!("Server error ({})", status.as_u16())),
            },
            Err(_) if !status.is_success() => Err(format!("Server error ({})", status.as_u16())),
            Err(e) => Err(format!("Failed to parse response: {}", e)),
        }
    }

    /// Send a request whose success carries no data. Only an error payload or a
    /// non-success status counts as failure.
    pub(crate) async fn send_acknowledged(&self, request: RequestBuilder) -> Result<(), String> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.error);

        match error {
            Some(err) => Err(err.message),
            None if status.is_success() => Ok(()),
            None => Err(format!("Server error ({})", status.as_u16())),
        }
    }
}

#[async_trait::async_trait]
impl SwapApi for ApiClient {
    async fn get_swaps(&self, page: u32, status: Option<StatusFilter>) -> Result<Vec<SwapRecord>, String> {
        crate::services::api::swaps::get_swaps(self, page, status).await
    }

    async fn get_settings(&self) -> Result<CatalogResponse, String> {
        crate::services::api::settings::get_settings(self).await
    }

    async fn set_swap_published_tx(
        &self,
        swap_id: &str,
        status: PublishedSwapTransactionStatus,
        transaction_id: &str,
    ) -> Result<(), String> {
        crate::services::api::swaps::set_swap_published_tx(self, swap_id, status, transaction_id).await
    }
}
