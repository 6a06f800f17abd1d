//! Monitoring-run tests with fake sink/store; the reachability probe is
//! exercised against a local axum server.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use std::time::Duration;

use trackwire_core::record::RecordStatus;
use trackwire_gateway::config::MonitorSection;
use trackwire_gateway::monitor::{probe_app, MonitorRunner};
use trackwire_gateway::sink::TrackingSink;
use trackwire_gateway::store::MetricsStore;

use support::{InMemoryStore, RecordingSink};

fn monitor_cfg(app_url: Option<String>) -> MonitorSection {
    MonitorSection {
        app_url,
        probe_timeout_ms: 2000,
    }
}

async fn spawn_app(status: StatusCode) -> String {
    let app = Router::new().route("/", get(move || async move { status }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn healthy_run_synthesizes_metrics_once_and_reports_info() {
    let store = Arc::new(InMemoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    let runner = MonitorRunner::new(
        Arc::clone(&store) as Arc<dyn MetricsStore>,
        Arc::clone(&sink) as Arc<dyn TrackingSink>,
        &monitor_cfg(None),
    );

    runner.run().await;

    let first = store.stored_metrics().expect("snapshot must be persisted");
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Monitoring report");
    assert_eq!(records[0].status, RecordStatus::Done);
    assert_eq!(records[0].progress, 100);
    assert!(records[0].description.contains("System operational"));
    assert!(records[0].description.contains(&format!("Users: {}", first.users)));

    // a second run reuses the persisted snapshot, it is not regenerated
    runner.run().await;
    assert_eq!(store.stored_metrics().unwrap(), first);
    assert_eq!(sink.records().len(), 2);
}

#[tokio::test]
async fn store_failure_is_isolated_and_report_is_error_level() {
    let store = Arc::new(InMemoryStore::new());
    store.break_ping();
    let sink = Arc::new(RecordingSink::new());
    let runner = MonitorRunner::new(
        Arc::clone(&store) as Arc<dyn MetricsStore>,
        Arc::clone(&sink) as Arc<dyn TrackingSink>,
        &monitor_cfg(None),
    );

    runner.run().await;

    // metrics step still ran despite the failed ping
    assert!(store.stored_metrics().is_some());

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Database check failed");
    assert_eq!(records[0].status, RecordStatus::Error);
    assert_eq!(records[0].progress, 0);

    assert_eq!(records[1].title, "Monitoring report");
    assert_eq!(records[1].status, RecordStatus::Error);
    assert!(records[1].description.contains("Problems detected"));
}

#[tokio::test]
async fn metrics_read_failure_suppresses_the_report() {
    let store = Arc::new(InMemoryStore::new());
    store.break_reads();
    let sink = Arc::new(RecordingSink::new());
    let runner = MonitorRunner::new(
        Arc::clone(&store) as Arc<dyn MetricsStore>,
        Arc::clone(&sink) as Arc<dyn TrackingSink>,
        &monitor_cfg(None),
    );

    runner.run().await;

    assert!(store.stored_metrics().is_none());
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn reachable_app_keeps_the_run_healthy() {
    let url = spawn_app(StatusCode::OK).await;
    let store = Arc::new(InMemoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    let runner = MonitorRunner::new(
        Arc::clone(&store) as Arc<dyn MetricsStore>,
        Arc::clone(&sink) as Arc<dyn TrackingSink>,
        &monitor_cfg(Some(url)),
    );

    runner.run().await;

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, RecordStatus::Done);
}

#[tokio::test]
async fn failing_app_probe_reports_unhealthy() {
    let url = spawn_app(StatusCode::INTERNAL_SERVER_ERROR).await;
    let store = Arc::new(InMemoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    let runner = MonitorRunner::new(
        Arc::clone(&store) as Arc<dyn MetricsStore>,
        Arc::clone(&sink) as Arc<dyn TrackingSink>,
        &monitor_cfg(Some(url)),
    );

    runner.run().await;

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Application check failed");
    assert_eq!(records[0].status, RecordStatus::Error);
    assert!(records[0].description.contains("status 500"));
    assert_eq!(records[1].title, "Monitoring report");
    assert_eq!(records[1].status, RecordStatus::Error);
}

#[tokio::test]
async fn probe_failures_carry_the_unreachable_code() {
    let client = reqwest::Client::new();
    let timeout = Duration::from_millis(2000);

    let url = spawn_app(StatusCode::INTERNAL_SERVER_ERROR).await;
    let err = probe_app(&client, &url, timeout).await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNREACHABLE");
    assert!(err.to_string().contains("status 500"));

    // nothing listening on this port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);
    let err = probe_app(&client, &dead, timeout).await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNREACHABLE");
}

#[tokio::test]
async fn unreachable_app_reports_unhealthy() {
    // bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let store = Arc::new(InMemoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    let runner = MonitorRunner::new(
        Arc::clone(&store) as Arc<dyn MetricsStore>,
        Arc::clone(&sink) as Arc<dyn TrackingSink>,
        &monitor_cfg(Some(url)),
    );

    runner.run().await;

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Application check failed");
    assert_eq!(records[1].status, RecordStatus::Error);
}
