//! # Settings Endpoint
//!
//! Exchange and network catalog.

use shared::CatalogResponse;

use super::client::ApiClient;

/// `GET /api/settings`
pub async fn get_settings(client: &ApiClient) -> Result<CatalogResponse, String> {
    let url = format!("{}/api/settings", client.base_url());
    client
        .send_enveloped::<CatalogResponse>(client.client.get(&url))
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Settings fetch failed"))
}
