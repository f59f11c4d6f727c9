//! # Common Error Types
//!
//! Consolidated error handling for the swap history client.
//!
//! ## Error Categories
//!
//! - **Api**: Remote fetch failures (transport errors, HTTP errors, `{ error: { message } }` payloads)
//! - **Timeout**: A page fetch exceeded its time bound; handled exactly like `Api`
//! - **Config**: Invalid environment configuration
//! - **Validation**: Invalid caller input
//! - **State**: Operation refused in the current state
//!
//! None of these are fatal. Remote errors are scoped to one fetch attempt and never
//! clear records that were already loaded.
//!
//! ## Error Conversion
//!
//! The service layer reports failures as `String` (see [`crate::core::service::SwapApi`]);
//! `String` and `&str` convert into [`AppError::Api`].

use std::time::Duration;

use thiserror::Error;

/// Application-wide error type.
///
/// ```rust
/// use std::time::Duration;
/// use swap_history::core::error::AppError;
///
/// let api_err = AppError::Api("Unauthorized".to_string());
/// let timeout = AppError::Timeout(Duration::from_secs(10));
///
/// assert_eq!(api_err.to_string(), "API error: Unauthorized");
/// assert_eq!(timeout.to_string(), "Request timed out after 10s");
/// assert!(timeout.is_remote());
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Remote fetch error: the API answered with an error payload or could not be reached.
    #[error("API error: {0}")]
    Api(String),

    /// The request did not complete within the configured bound.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Invalid or missing configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not allowed in the current state.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// Whether the error came from the remote source (and may be retried by the user).
    pub fn is_remote(&self) -> bool {
        matches!(self, AppError::Api(_) | AppError::Timeout(_))
    }

    /// Short text suitable for a transient user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(msg) => msg.clone(),
            AppError::Timeout(_) => "The server took too long to respond. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_converts_to_api_error() {
        let err: AppError = "Server error (502)".into();
        assert_eq!(err, AppError::Api("Server error (502)".to_string()));
        assert!(err.is_remote());
    }

    #[test]
    fn test_user_message() {
        assert_eq!(AppError::Api("Swap not found".to_string()).user_message(), "Swap not found");
        assert_eq!(
            AppError::State("already loading".to_string()).user_message(),
            "State error: already loading"
        );
        assert!(!AppError::Config("bad".to_string()).is_remote());
    }
}
