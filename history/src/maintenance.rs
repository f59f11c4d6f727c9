//! Downtime notice shown instead of the history while the service is upgraded.

use std::fmt;

use chrono::NaiveTime;

use crate::core::error::{AppError, Result};

pub const UPGRADE_MESSAGE: &str =
    "We're upgrading our systems and infrastructure to give you the best experience yet.";
pub const PENDING_SWAPS_MESSAGE: &str = "Any pending swaps will be completed after maintenance.";
pub const DEFAULT_UPDATES_URL: &str = "https://twitter.com/layerswap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceNotice {
    /// UTC time of day the service is expected back
    pub resume_at: NaiveTime,
    /// Where "Follow for updates" points
    pub updates_url: String,
}

impl MaintenanceNotice {
    pub fn new(resume_at: NaiveTime) -> Self {
        Self {
            resume_at,
            updates_url: DEFAULT_UPDATES_URL.to_string(),
        }
    }

    /// Parse an `HH:MM` resume time.
    pub fn parse(resume_at: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(resume_at.trim(), "%H:%M")
            .map_err(|e| AppError::Validation(format!("Invalid maintenance time '{}': {}", resume_at, e)))?;
        Ok(Self::new(time))
    }

    pub fn with_updates_url(mut self, url: impl Into<String>) -> Self {
        self.updates_url = url.into();
        self
    }

    pub fn headline(&self) -> String {
        format!("We'll be back at {} UTC", self.resume_at.format("%H:%M"))
    }

    pub fn message(&self) -> &'static str {
        UPGRADE_MESSAGE
    }

    pub fn pending_swaps_note(&self) -> &'static str {
        PENDING_SWAPS_MESSAGE
    }
}

impl fmt::Display for MaintenanceNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message())?;
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "{}", self.pending_swaps_note())?;
        write!(f, "Follow for updates: {}", self.updates_url)
    }
}
