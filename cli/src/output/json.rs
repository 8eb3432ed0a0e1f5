//! JSON output helpers.
//!
//! Every `--json` code path goes through here so the schemas stay in one
//! place.

use anyhow::{Context, Result};

use crate::application::services::app_lister::AppListing;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a completed listing as `{"endpoint": ..., "apps": [...]}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_listing(listing: &AppListing) -> Result<String> {
    let obj = serde_json::json!({
        "endpoint": listing.endpoint,
        "apps": listing.apps,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format the version object `{"version": ...}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_version(version: &str) -> Result<String> {
    let obj = serde_json::json!({ "version": version });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
