//! # Swap Endpoints
//!
//! Swap listing and published-transaction reporting.

use shared::{PublishSwapTransactionRequest, PublishedSwapTransactionStatus, StatusFilter, SwapRecord};

use super::client::ApiClient;

/// Build the listing URL for one page.
pub(crate) fn swaps_url(base_url: &str, page: u32, status: Option<StatusFilter>) -> String {
    match status.and_then(|s| s.wire_code()) {
        Some(code) => format!("{}/api/swaps?page={}&status={}", base_url, page, code),
        None => format!("{}/api/swaps?page={}", base_url, page),
    }
}

/// `GET /api/swaps?page=N[&status=S]`
#[tracing::instrument(skip_all, fields(page = page, status = ?status))]
pub async fn get_swaps(
    client: &ApiClient,
    page: u32,
    status: Option<StatusFilter>,
) -> Result<Vec<SwapRecord>, String> {
    let start = std::time::Instant::now();
    let url = swaps_url(client.base_url(), page, status);

    let result = client
        .send_enveloped::<Vec<SwapRecord>>(client.client.get(&url))
        .await;

    match &result {
        Ok(swaps) => tracing::debug!(
            count = swaps.len(),
            duration_ms = start.elapsed().as_millis(),
            "Swap page fetched"
        ),
        Err(e) => tracing::warn!(
            error = %e,
            duration_ms = start.elapsed().as_millis(),
            "Swap page fetch failed"
        ),
    }
    result
}

/// `POST /api/swaps/{id}/transactions`
#[tracing::instrument(skip_all, fields(swap_id = %swap_id, status = ?status))]
pub async fn set_swap_published_tx(
    client: &ApiClient,
    swap_id: &str,
    status: PublishedSwapTransactionStatus,
    transaction_id: &str,
) -> Result<(), String> {
    let request = PublishSwapTransactionRequest {
        status,
        transaction_id: transaction_id.to_string(),
    };

    let url = format!("{}/api/swaps/{}/transactions", client.base_url(), swap_id);
    client
        .send_acknowledged(client.client.post(&url).json(&request))
        .await?;

    tracing::info!("Published transaction recorded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_url_with_filter() {
        assert_eq!(
            swaps_url("https://api.example.com", 2, Some(StatusFilter::Active)),
            "https://api.example.com/api/swaps?page=2&status=5"
        );
        assert_eq!(
            swaps_url("https://api.example.com", 1, Some(StatusFilter::CancelledOnly)),
            "https://api.example.com/api/swaps?page=1&status=4"
        );
    }

    #[test]
    fn test_swaps_url_without_filter() {
        assert_eq!(
            swaps_url("https://api.example.com", 3, Some(StatusFilter::All)),
            "https://api.example.com/api/swaps?page=3"
        );
        assert_eq!(
            swaps_url("https://api.example.com", 1, None),
            "https://api.example.com/api/swaps?page=1"
        );
    }
}
