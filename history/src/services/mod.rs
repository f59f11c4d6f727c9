//! # External Services
//!
//! - **[`api`]**: HTTP client for the swap REST API, implementing [`crate::core::service::SwapApi`]

pub mod api;
