//! # Shared Utility Functions
//!
//! Display helpers used by every client of the swap API.
//!
//! - [`format_id`] - Shorten long identifiers (swap ids, session ids) with an ellipsis
//! - [`truncate_id`] - [`format_id`] with the default 4/4 split
//! - [`format_amount`] - Render an asset amount without trailing zeros
//!
//! ```rust
//! use shared::utils::{format_amount, truncate_id};
//!
//! assert_eq!(truncate_id("6f1c2b7e-49aa-4c1e-9b4f-0d3c1a2b9e77"), "6f1c...9e77");
//! assert_eq!(format_amount(0.2500), "0.25");
//! ```

/// Shorten an identifier by keeping the first `prefix_len` and last `suffix_len` characters.
///
/// Identifiers not longer than `prefix_len + suffix_len` are returned as-is.
///
/// ```rust
/// use shared::utils::format_id;
///
/// let id = "6f1c2b7e-49aa-4c1e-9b4f-0d3c1a2b9e77";
/// assert_eq!(format_id(id, 4, 4), "6f1c...9e77");
/// assert_eq!(format_id(id, 8, 2), "6f1c2b7e...77");
/// assert_eq!(format_id("short", 4, 4), "short");
/// ```
pub fn format_id(id: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return id.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// [`format_id`] with a 4-character prefix and suffix.
pub fn truncate_id(id: &str) -> String {
    format_id(id, 4, 4)
}

/// Format an asset amount with at most 8 decimals and no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let formatted = format!("{:.8}", amount);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
