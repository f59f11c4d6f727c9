//! # Logging
//!
//! Structured `tracing` output to a daily rolling file under `logs/` and, optionally, stdout.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `swap_history=debug,info`)
//! - `SWAP_HISTORY_LOG_DIR`: Log directory (default: `logs`)
//! - `SWAP_HISTORY_LOG_STDOUT`: Mirror logs to stdout (`1`/`true`)

pub mod config;
pub mod logger;

pub use config::LogConfig;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment. Call once at startup and hold the guard.
pub fn init() -> Option<WorkerGuard> {
    logger::init(&LogConfig::from_env())
}
