//! Domain types and validators for runtime settings.
//!
//! Pure functions only — no I/O, no async, no environment access.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Prefix shared by every environment variable read into [`Settings`].
pub const ENV_PREFIX: &str = "CF_LIST_APPS_";

pub const DEFAULT_CF_BIN: &str = "cf";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_PAGES: usize = 10_000;

// ── Settings schema ──────────────────────────────────────────────────────────

/// Runtime settings, one field per `CF_LIST_APPS_<FIELD>` variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Host CLI binary used for `curl` calls.
    #[serde(default = "default_cf_bin")]
    pub cf_bin: String,

    /// Timeout for a single host call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of pages fetched in one listing.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cf_bin: default_cf_bin(),
            timeout_secs: default_timeout_secs(),
            max_pages: default_max_pages(),
        }
    }
}

fn default_cf_bin() -> String {
    DEFAULT_CF_BIN.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

impl Settings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would make every listing fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending variable.
    pub fn validate(&self) -> Result<()> {
        if self.cf_bin.trim().is_empty() {
            return Err(invalid("CF_BIN", &self.cf_bin, "must name a program"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("TIMEOUT_SECS", "0", "must be at least 1"));
        }
        if self.max_pages == 0 {
            return Err(invalid("MAX_PAGES", "0", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str, reason: &str) -> anyhow::Error {
    ConfigError::InvalidValue {
        key: format!("{ENV_PREFIX}{field}"),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
