//! # Swap History CLI
//!
//! Prints the user's swap history using the settings from the environment.

use std::process::ExitCode;
use std::sync::Arc;

use shared::truncate_id;
use swap_history::catalog::Catalog;
use swap_history::config::{init_config, HistoryConfig};
use swap_history::core::SwapApi;
use swap_history::history::{build_rows, PaginatedListLoader};
use swap_history::services::api::ApiClient;
use swap_history::{debug, Result};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Swap history failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = init_config()?;

    if let Some(notice) = &config.maintenance {
        tracing::warn!(resume_at = %notice.resume_at, "Service under maintenance");
        println!("{}", notice);
        return Ok(());
    }

    let api = build_client(config);

    let catalog = match Catalog::load(api.as_ref(), config.fetch_timeout).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog unavailable, showing raw names");
            Catalog::default()
        }
    };

    let mut loader = PaginatedListLoader::new(api, config.fetch_timeout);
    let has_cancelled = loader.probe_has_cancelled().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Cancelled swap probe failed");
        false
    });

    let state = loader.load_pages(config.filter, config.max_pages).await?;
    if state.records().is_empty() {
        println!("No swaps found ({}).", config.filter);
        return Ok(());
    }

    for row in build_rows(state.records(), &catalog) {
        println!(
            "{:<16} {:<20} {:<20} {:<24} {}",
            truncate_id(&row.id),
            row.source_label(),
            row.destination_label(),
            row.status.label(),
            row.amount_label()
        );
    }

    if !state.is_last_page() {
        println!("... more swaps available (raise SWAP_HISTORY_MAX_PAGES)");
    }
    if has_cancelled {
        println!("Cancelled swaps exist; set SWAP_HISTORY_FILTER=all to include them.");
    }
    Ok(())
}

fn build_client(config: &HistoryConfig) -> Arc<dyn SwapApi> {
    let client = ApiClient::new(config.api_base_url.clone(), config.fetch_timeout);
    match &config.access_token {
        Some(token) => Arc::new(client.with_access_token(token.clone())),
        None => Arc::new(client),
    }
}
