//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_FILTER: &str = "swap_history=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "swap_history=debug,info")
    pub log_level: String,
    /// Directory for the daily rolling log file
    pub log_dir: PathBuf,
    /// Also write human-readable logs to stdout
    pub log_to_stdout: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_FILTER.to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stdout: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            log_dir: lookup("SWAP_HISTORY_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_to_stdout: lookup("SWAP_HISTORY_LOG_STDOUT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Path of today's log file prefix inside [`LogConfig::log_dir`]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(super::logger::LOG_FILE_PREFIX)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
