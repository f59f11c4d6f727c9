//! # Swap API Client Module
//!
//! HTTP client for the swap REST API.
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports
//! ├── client.rs    - ApiClient struct, envelope handling, SwapApi impl
//! ├── swaps.rs     - Swap listing and published transactions
//! └── settings.rs  - Exchange/network catalog
//! ```

pub mod client;
pub mod settings;
pub mod swaps;

pub use client::ApiClient;
