//! Unit tests for the app listing service.

#![allow(clippy::expect_used)]

use cf_list_apps::application::services::app_lister::{ListOptions, collect_apps, list_apps};
use cf_list_apps::domain::{AppState, FilterMode, ListError};

use crate::fakes::{EndlessCfHost, FakeCfHost, RecordingReporter, page, sample_apps};

const ENDPOINT: &str = "https://api.example.com";

fn options(filter: FilterMode) -> ListOptions {
    ListOptions {
        filter,
        max_pages: 100,
    }
}

fn names(apps: &[cf_list_apps::domain::AppRecord]) -> Vec<&str> {
    apps.iter().map(|a| a.name.as_str()).collect()
}

fn single_page_host() -> FakeCfHost {
    FakeCfHost::new(ENDPOINT).with_page(page(None, &sample_apps()))
}

fn two_page_host() -> FakeCfHost {
    FakeCfHost::new(ENDPOINT)
        .with_page(page(Some("v2/apps?page=2"), &sample_apps()))
        .with_page(page(None, &[("app4", "STARTED")]))
}

// ── Filtering ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_all_apps_in_order() {
    let host = single_page_host();
    let listing = list_apps(&host, options(FilterMode::All), &RecordingReporter::default())
        .await
        .expect("listing");
    assert_eq!(names(&listing.apps), vec!["app1", "app2", "app3"]);
    assert_eq!(listing.endpoint, ENDPOINT);
}

#[tokio::test]
async fn test_list_started_only_excludes_stopped() {
    let host = single_page_host();
    let listing = list_apps(
        &host,
        options(FilterMode::StartedOnly),
        &RecordingReporter::default(),
    )
    .await
    .expect("listing");
    assert_eq!(names(&listing.apps), vec!["app1", "app2"]);
    assert!(listing.apps.iter().all(|a| a.state == AppState::Started));
}

#[tokio::test]
async fn test_list_stopped_only() {
    let host = single_page_host();
    let listing = list_apps(
        &host,
        options(FilterMode::StoppedOnly),
        &RecordingReporter::default(),
    )
    .await
    .expect("listing");
    assert_eq!(names(&listing.apps), vec!["app3"]);
}

#[tokio::test]
async fn test_empty_first_page_is_empty_listing() {
    let host = FakeCfHost::new(ENDPOINT).with_page(page(None, &[]));
    let listing = list_apps(&host, options(FilterMode::All), &RecordingReporter::default())
        .await
        .expect("listing");
    assert!(listing.apps.is_empty());
    assert_eq!(host.calls(), vec!["v2/apps"]);
}

// ── Pagination ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_follows_next_url_verbatim() {
    let host = two_page_host();
    let apps = collect_apps(&host, 100).await.expect("apps");
    assert_eq!(host.calls(), vec!["v2/apps", "v2/apps?page=2"]);
    assert_eq!(names(&apps), vec!["app1", "app2", "app3", "app4"]);
}

#[tokio::test]
async fn test_fetch_count_equals_page_count() {
    let host = FakeCfHost::new(ENDPOINT)
        .with_page(page(Some("/v2/apps?order-direction=asc&page=2"), &[("a", "STARTED")]))
        .with_page(page(Some("/v2/apps?order-direction=asc&page=3"), &[("b", "STOPPED")]))
        .with_page(page(Some(""), &[("c", "STARTED")]));
    let apps = collect_apps(&host, 100).await.expect("apps");
    assert_eq!(
        host.calls(),
        vec![
            "v2/apps",
            "/v2/apps?order-direction=asc&page=2",
            "/v2/apps?order-direction=asc&page=3",
        ]
    );
    assert_eq!(names(&apps), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_duplicates_across_pages_are_kept() {
    let host = FakeCfHost::new(ENDPOINT)
        .with_page(page(Some("v2/apps?page=2"), &[("same", "STARTED")]))
        .with_page(page(None, &[("same", "STARTED")]));
    let apps = collect_apps(&host, 100).await.expect("apps");
    assert_eq!(names(&apps), vec!["same", "same"]);
}

#[tokio::test]
async fn test_filter_applies_across_pages() {
    let host = two_page_host();
    let listing = list_apps(
        &host,
        options(FilterMode::StartedOnly),
        &RecordingReporter::default(),
    )
    .await
    .expect("listing");
    assert_eq!(names(&listing.apps), vec!["app1", "app2", "app4"]);
}

#[tokio::test]
async fn test_page_limit_stops_endless_chain() {
    let host = EndlessCfHost::default();
    let err = collect_apps(&host, 5).await.expect_err("should hit limit");
    assert!(matches!(err, ListError::PageLimitExceeded { limit: 5 }));
    assert_eq!(*host.calls.borrow(), 5);
}

#[tokio::test]
async fn test_page_limit_not_hit_when_last_page_is_at_limit() {
    let host = two_page_host();
    let apps = collect_apps(&host, 2).await.expect("exactly two pages allowed");
    assert_eq!(apps.len(), 4);
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_endpoint_failure_is_upstream_error_without_fetching() {
    let host = FakeCfHost::failing_endpoint("Bad bad error");
    let err = list_apps(&host, options(FilterMode::All), &RecordingReporter::default())
        .await
        .expect_err("should fail");
    match err {
        ListError::UpstreamCallFailed(msg) => assert!(msg.contains("Bad bad error")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn test_curl_failure_is_upstream_error() {
    let host = FakeCfHost::new(ENDPOINT).with_failure("something went wrong");
    let err = list_apps(&host, options(FilterMode::StoppedOnly), &RecordingReporter::default())
        .await
        .expect_err("should fail");
    assert_eq!(err.code(), "upstream_call_failed");
    assert!(err.to_string().contains("something went wrong"));
}

#[tokio::test]
async fn test_failure_on_later_page_discards_earlier_records() {
    let host = FakeCfHost::new(ENDPOINT)
        .with_page(page(Some("v2/apps?page=2"), &sample_apps()))
        .with_failure("connection reset");
    let result = list_apps(&host, options(FilterMode::All), &RecordingReporter::default()).await;
    assert!(matches!(result, Err(ListError::UpstreamCallFailed(_))));
    assert_eq!(host.calls().len(), 2);
}

#[tokio::test]
async fn test_failure_is_not_retried() {
    let host = FakeCfHost::new(ENDPOINT)
        .with_failure("flaky")
        .with_page(page(None, &sample_apps()));
    assert!(collect_apps(&host, 100).await.is_err());
    assert_eq!(host.calls(), vec!["v2/apps"]);
}

#[tokio::test]
async fn test_malformed_page_is_malformed_response() {
    let host = FakeCfHost::new(ENDPOINT)
        .with_page(page(Some("v2/apps?page=2"), &sample_apps()))
        .with_page("<html>502 Bad Gateway</html>".to_string());
    let err = collect_apps(&host, 100).await.expect_err("should fail");
    match err {
        ListError::MalformedResponse { path, .. } => assert_eq!(path, "v2/apps?page=2"),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reports_endpoint_being_queried() {
    let host = single_page_host();
    let reporter = RecordingReporter::default();
    list_apps(&host, options(FilterMode::All), &reporter)
        .await
        .expect("listing");
    let steps = reporter.steps.borrow();
    assert_eq!(steps.len(), 1);
    assert!(steps[0].contains("api.example.com/v2/apps"), "got {}", steps[0]);
}

#[tokio::test]
async fn test_trailing_slash_on_endpoint_not_doubled() {
    let host = FakeCfHost::new("https://api.example.com/").with_page(page(None, &[]));
    let reporter = RecordingReporter::default();
    list_apps(&host, options(FilterMode::All), &reporter)
        .await
        .expect("listing");
    assert!(reporter.steps.borrow()[0].contains("https://api.example.com/v2/apps"));
}
