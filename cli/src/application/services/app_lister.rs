//! Application service — app listing use-case.
//!
//! Follows `next_url` until the last page, accumulates every record, then
//! applies the state filter. Nothing is returned until every page has been
//! fetched, so a failure on any page discards the whole listing.

use crate::application::ports::{CfHost, ProgressReporter};
use crate::domain::{APPS_PATH, AppRecord, FilterMode, ListError, Page, filter_apps};

/// Per-invocation listing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub filter: FilterMode,
    /// Upper bound on fetched pages.
    pub max_pages: usize,
}

/// Result of a completed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppListing {
    /// API endpoint the apps were fetched from.
    pub endpoint: String,
    /// Apps surviving the filter, in fetch order.
    pub apps: Vec<AppRecord>,
}

/// List apps on the targeted endpoint.
///
/// # Errors
///
/// - [`ListError::UpstreamCallFailed`] if the endpoint lookup or any API call
///   fails.
/// - [`ListError::MalformedResponse`] if a page is not valid JSON.
/// - [`ListError::PageLimitExceeded`] if more than `max_pages` pages are
///   announced.
pub async fn list_apps(
    host: &impl CfHost,
    options: ListOptions,
    reporter: &impl ProgressReporter,
) -> Result<AppListing, ListError> {
    let endpoint = host.api_endpoint().await.map_err(upstream)?;
    reporter.step(&format!(
        "Getting apps from {}/{APPS_PATH} ...",
        endpoint.trim_end_matches('/')
    ));

    let collected = collect_apps(host, options.max_pages).await?;
    let total = collected.len();
    let apps = filter_apps(collected, options.filter);
    tracing::info!(total, shown = apps.len(), filter = ?options.filter, "listing complete");

    Ok(AppListing { endpoint, apps })
}

/// Fetch every page starting at `v2/apps` and concatenate their records.
///
/// # Errors
///
/// See [`list_apps`].
pub async fn collect_apps(
    host: &impl CfHost,
    max_pages: usize,
) -> Result<Vec<AppRecord>, ListError> {
    let mut path = APPS_PATH.to_string();
    let mut collection = Vec::new();
    let mut fetched = 0usize;

    loop {
        let body = host.curl(&path).await.map_err(upstream)?;
        let page = Page::parse(&path, &body)?;
        fetched += 1;
        tracing::debug!(
            path = %path,
            records = page.records.len(),
            next = page.next_path.as_deref().unwrap_or(""),
            "fetched page"
        );
        collection.extend(page.records);

        match page.next_path {
            None => break,
            Some(_) if fetched >= max_pages => {
                tracing::warn!(limit = max_pages, "page limit reached");
                return Err(ListError::PageLimitExceeded { limit: max_pages });
            }
            Some(next) => path = next,
        }
    }

    Ok(collection)
}

fn upstream(err: anyhow::Error) -> ListError {
    ListError::UpstreamCallFailed(format!("{err:#}"))
}
