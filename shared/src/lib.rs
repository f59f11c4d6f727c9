//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the swap API and every client that
//! consumes it (the history loader, the onramp bridge, the headless driver).
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::swap`]**: Swap records, statuses, ledger transactions and list filters
//!   - **[`dto::catalog`]**: Exchange and network catalog served by the settings endpoint
//!   - **[`dto::onramp`]**: Payment-session statuses and published transaction reports
//!   - **[`dto::response`]**: The `{ data } | { error }` response envelope
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides
//! - Optional fields are omitted from JSON when `None`
//! - Enums serialize as snake_case strings; unknown values decode to an `Unknown` variant
//!   so one unexpected record never fails a whole page
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::response::ApiResponse;
//! use shared::dto::swap::SwapRecord;
//!
//! let body = r#"{ "data": [] }"#;
//! let page: ApiResponse<Vec<SwapRecord>> = serde_json::from_str(body).unwrap();
//! assert!(page.into_result().unwrap().is_empty());
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
