//! # History Configuration
//!
//! Settings loaded from environment variables (after `.env` is read by the binary).
//! Everything is validated on startup so a bad value fails fast.
//!
//! | Variable                  | Default                    |
//! |---------------------------|----------------------------|
//! | `SWAP_API_BASE_URL`       | `https://api.layerswap.io` |
//! | `SWAP_API_TOKEN`          | unset (anonymous requests) |
//! | `SWAP_FETCH_TIMEOUT_SECS` | `10` (1-120)               |
//! | `SWAP_HISTORY_FILTER`     | `active`                   |
//! | `SWAP_HISTORY_MAX_PAGES`  | `5`                        |
//! | `SWAP_MAINTENANCE_UNTIL`  | unset (`HH:MM` UTC)        |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use swap_history::config::{history_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let timeout = history_config().fetch_timeout;
//! ```

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

use shared::StatusFilter;

use crate::core::error::{AppError, Result};
use crate::maintenance::MaintenanceNotice;

pub const DEFAULT_API_BASE_URL: &str = "https://api.layerswap.io";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_PAGES: u32 = 5;

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    /// Swap API root, without trailing slash
    pub api_base_url: String,

    /// Bearer token for the user's swaps
    pub access_token: Option<String>,

    /// Upper bound for a single page fetch
    ///
    /// Valid range: 1-120 seconds
    pub fetch_timeout: Duration,

    /// Filter the binary lists with
    pub filter: StatusFilter,

    /// Maximum number of pages the binary loads before stopping
    pub max_pages: u32,

    /// Set while the service is down for maintenance
    pub maintenance: Option<MaintenanceNotice>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            filter: StatusFilter::Active,
            max_pages: DEFAULT_MAX_PAGES,
            maintenance: None,
        }
    }
}

impl HistoryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = var("SWAP_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let access_token = var("SWAP_API_TOKEN");

        let timeout_secs: u64 = match var("SWAP_FETCH_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .map_err(|e| AppError::Config(format!("SWAP_FETCH_TIMEOUT_SECS must be a valid number: {}", e)))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let filter = match var("SWAP_HISTORY_FILTER") {
            Some(v) => match v.parse() {
                Ok(StatusFilter::CancelledOnly) => {
                    return Err(AppError::Config(
                        "SWAP_HISTORY_FILTER must be 'active' or 'all'".to_string(),
                    ))
                }
                Ok(filter) => filter,
                Err(e) => return Err(AppError::Config(format!("SWAP_HISTORY_FILTER: {}", e))),
            },
            None => StatusFilter::Active,
        };

        let max_pages = match var("SWAP_HISTORY_MAX_PAGES") {
            Some(v) => v
                .parse()
                .map_err(|e| AppError::Config(format!("SWAP_HISTORY_MAX_PAGES must be a valid number: {}", e)))?,
            None => DEFAULT_MAX_PAGES,
        };

        let maintenance = var("SWAP_MAINTENANCE_UNTIL")
            .map(|v| MaintenanceNotice::parse(&v))
            .transpose()
            .map_err(|e| AppError::Config(format!("SWAP_MAINTENANCE_UNTIL: {}", e)))?;

        Ok(Self {
            api_base_url,
            access_token,
            fetch_timeout: Duration::from_secs(timeout_secs),
            filter,
            max_pages,
            maintenance,
        })
    }

    /// Validate ranges and formats.
    pub fn validate(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(AppError::Config(
                "SWAP_API_BASE_URL must start with http:// or https://".to_string(),
            ));
        }

        let secs = self.fetch_timeout.as_secs();
        if !(1..=120).contains(&secs) {
            return Err(AppError::Config(
                "SWAP_FETCH_TIMEOUT_SECS must be between 1 and 120".to_string(),
            ));
        }

        if self.max_pages < 1 {
            return Err(AppError::Config("SWAP_HISTORY_MAX_PAGES must be at least 1".to_string()));
        }

        Ok(())
    }
}

static CONFIG: OnceLock<HistoryConfig> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Fails when a variable is malformed, validation fails, or the config was
/// already initialized.
pub fn init_config() -> Result<&'static HistoryConfig> {
    let config = HistoryConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(history_config())
}

/// Global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn history_config() -> &'static HistoryConfig {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<HistoryConfig> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        HistoryConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.filter, StatusFilter::Active);
        assert_eq!(config.max_pages, 5);
        assert!(config.access_token.is_none());
        assert!(config.maintenance.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SWAP_API_BASE_URL", "https://sandbox.example.com/"),
            ("SWAP_API_TOKEN", "tok"),
            ("SWAP_FETCH_TIMEOUT_SECS", "30"),
            ("SWAP_HISTORY_FILTER", "all"),
            ("SWAP_HISTORY_MAX_PAGES", "2"),
            ("SWAP_MAINTENANCE_UNTIL", "19:00"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url, "https://sandbox.example.com");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.filter, StatusFilter::All);
        assert_eq!(config.max_pages, 2);
        assert_eq!(config.maintenance.unwrap().headline(), "We'll be back at 19:00 UTC");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[("SWAP_API_TOKEN", "  "), ("SWAP_MAINTENANCE_UNTIL", "")]).unwrap();
        assert!(config.access_token.is_none());
        assert!(config.maintenance.is_none());
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(load(&[("SWAP_FETCH_TIMEOUT_SECS", "ten")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[("SWAP_HISTORY_FILTER", "pending")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[("SWAP_HISTORY_FILTER", "cancelled")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[("SWAP_HISTORY_FILTER", "cancelled-only")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[("SWAP_MAINTENANCE_UNTIL", "7pm")]), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_ranges() {
        let config = load(&[("SWAP_FETCH_TIMEOUT_SECS", "0")]).unwrap();
        assert!(config.validate().is_err());

        let config = load(&[("SWAP_FETCH_TIMEOUT_SECS", "121")]).unwrap();
        assert!(config.validate().is_err());

        let config = load(&[("SWAP_HISTORY_MAX_PAGES", "0")]).unwrap();
        assert!(config.validate().is_err());

        let config = load(&[("SWAP_API_BASE_URL", "ftp://example.com")]).unwrap();
        assert!(config.validate().is_err());
    }
}
