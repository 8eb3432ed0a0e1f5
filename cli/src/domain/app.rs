//! Application records, pages, and state filtering.
//!
//! Pure data in, data out. Parsing lives here so that every adapter and test
//! decodes Cloud Controller payloads the same way.

use serde::{Deserialize, Serialize};

use crate::domain::error::ListError;

/// First path requested when listing apps.
pub const APPS_PATH: &str = "v2/apps";

// ── AppState ──────────────────────────────────────────────────────────────────

/// Running state reported by the Cloud Controller.
///
/// Unknown values are preserved verbatim so a newer controller never breaks
/// the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Started,
    Stopped,
    Other(String),
}

impl AppState {
    /// Wire representation, e.g. `"STARTED"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Started => "STARTED",
            Self::Stopped => "STOPPED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AppState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "STARTED" => Self::Started,
            "STOPPED" => Self::Stopped,
            _ => Self::Other(value),
        }
    }
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AppState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for AppState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ── AppRecord ─────────────────────────────────────────────────────────────────

/// One deployed application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppRecord {
    pub name: String,
    pub state: AppState,
}

impl AppRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, state: AppState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

// ── Page ──────────────────────────────────────────────────────────────────────

/// Raw `v2/apps` response body.
#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    next_url: Option<String>,
    resources: Option<Vec<RawResource>>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResource {
    entity: AppRecord,
}

/// One fetched page of apps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records in the order the endpoint returned them.
    pub records: Vec<AppRecord>,
    /// Continuation path, `None` on the last page.
    pub next_path: Option<String>,
}

impl Page {
    /// Decode a page body fetched from `path`.
    ///
    /// An empty `next_url` is treated as absent. A Cloud Controller error
    /// document (`error_code` / `description` without `resources`) becomes
    /// [`ListError::UpstreamCallFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MalformedResponse`] when `body` is not a valid page.
    pub fn parse(path: &str, body: &str) -> Result<Self, ListError> {
        let raw: RawPage =
            serde_json::from_str(body).map_err(|source| ListError::MalformedResponse {
                path: path.to_string(),
                source,
            })?;

        let Some(resources) = raw.resources else {
            if raw.error_code.is_some() || raw.description.is_some() {
                return Err(ListError::UpstreamCallFailed(api_error_message(
                    raw.description.as_deref(),
                    raw.error_code.as_deref(),
                )));
            }
            return Ok(Self {
                records: Vec::new(),
                next_path: non_empty(raw.next_url),
            });
        };

        Ok(Self {
            records: resources.into_iter().map(|r| r.entity).collect(),
            next_path: non_empty(raw.next_url),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn api_error_message(description: Option<&str>, error_code: Option<&str>) -> String {
    match (description, error_code) {
        (Some(d), Some(c)) => format!("{d} ({c})"),
        (Some(d), None) => d.to_string(),
        (None, Some(c)) => c.to_string(),
        (None, None) => "unknown API error".to_string(),
    }
}

// ── FilterMode ────────────────────────────────────────────────────────────────

/// State-based inclusion policy for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    StartedOnly,
    StoppedOnly,
}

impl FilterMode {
    /// Select the mode from the `--started` / `--stopped` flags.
    ///
    /// The CLI rejects both flags together; if both still arrive, `--started`
    /// wins.
    #[must_use]
    pub fn from_flags(started: bool, stopped: bool) -> Self {
        match (started, stopped) {
            (true, _) => Self::StartedOnly,
            (false, true) => Self::StoppedOnly,
            (false, false) => Self::All,
        }
    }

    /// Returns `true` if `app` survives this filter.
    #[must_use]
    pub fn matches(self, app: &AppRecord) -> bool {
        match self {
            Self::All => true,
            Self::StartedOnly => app.state == AppState::Started,
            Self::StoppedOnly => app.state == AppState::Stopped,
        }
    }
}

/// Keep the apps matching `mode`, in their original order.
#[must_use]
pub fn filter_apps(apps: Vec<AppRecord>, mode: FilterMode) -> Vec<AppRecord> {
    apps.into_iter().filter(|a| mode.matches(a)).collect()
}
