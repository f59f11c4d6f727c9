//! # Core Abstractions
//!
//! Core traits and error types shared by every other module.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`SwapApi`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swap_history::core::service::SwapApi;
//! use swap_history::services::api::ApiClient;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn SwapApi> = Arc::new(ApiClient::new("https://api.layerswap.io", std::time::Duration::from_secs(10)));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::SwapApi;
