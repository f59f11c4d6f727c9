//! # Swap History Client - Library Root
//!
//! Incrementally loads a user's cross-chain swap history from the swap API,
//! 20 records per page, and joins every record with the exchange/network catalog
//! for display. The binary crate (`main.rs`) is a thin command-line front end.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap-history (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - Event-driven view controller             │
//! │  history    - Page state machine, loader, row join     │
//! │  catalog    - Exchange / network lookup tables         │
//! │  onramp     - Payment widget session bridge            │
//! │  services   - HTTP client for the swap API             │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │    Swap API     │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::HistoryApp`], state behind `Arc<RwLock<_>>`, results over `async_channel`
//! - **history**: [`history::PageState`] transitions and [`history::PaginatedListLoader`]
//! - **catalog**: [`catalog::Catalog`] built from `GET /api/settings`
//! - **onramp**: [`onramp::OnrampSession`] and [`onramp::OnrampBridge`]
//! - **maintenance**: Downtime notice view model
//! - **services**: [`services::api::ApiClient`], the production [`core::SwapApi`]
//! - **config**: Environment configuration
//! - **debug**: Logging setup
//! - **core**: Error type and service trait

pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod debug;
pub mod history;
pub mod maintenance;
pub mod onramp;
pub mod services;

pub use crate::core::error::{AppError, Result};
