//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Listing errors ────────────────────────────────────────────────────────────

/// Errors that abort an app listing. None of them are retried.
#[derive(Debug, Error)]
pub enum ListError {
    /// The host failed to report its endpoint or to run an API call.
    #[error("{0}")]
    UpstreamCallFailed(String),

    #[error("Invalid JSON response from {path}")]
    MalformedResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Gave up after {limit} pages. Raise CF_LIST_APPS_MAX_PAGES to fetch more.")]
    PageLimitExceeded { limit: usize },
}

impl ListError {
    /// Stable machine-readable code used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UpstreamCallFailed(_) => "upstream_call_failed",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::PageLimitExceeded { .. } => "page_limit_exceeded",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
