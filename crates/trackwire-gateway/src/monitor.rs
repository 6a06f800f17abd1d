//! One-shot monitoring run.
//!
//! Four sequential steps: store health, app reachability, metrics retrieval,
//! summary report. Each step isolates its own failure; a failed store or app
//! check never aborts the later steps, and only a failed metrics retrieval
//! suppresses the summary. Scheduling is an external concern (cron or a
//! platform trigger); `run` executes exactly one pass.

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rand::Rng;

use trackwire_core::error::{Result, TrackWireError};
use trackwire_core::record::{MetricsSnapshot, RecordStatus, TrackedRecord};

use crate::config::MonitorSection;
use crate::sink::TrackingSink;
use crate::store::MetricsStore;

/// Severity of a monitoring notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

pub struct MonitorRunner {
    store: Arc<dyn MetricsStore>,
    sink: Arc<dyn TrackingSink>,
    http: reqwest::Client,
    app_url: Option<String>,
    probe_timeout: Duration,
}

impl MonitorRunner {
    pub fn new(
        store: Arc<dyn MetricsStore>,
        sink: Arc<dyn TrackingSink>,
        cfg: &MonitorSection,
    ) -> Self {
        Self {
            store,
            sink,
            http: reqwest::Client::new(),
            app_url: cfg.probe_target().map(String::from),
            probe_timeout: Duration::from_millis(cfg.probe_timeout_ms),
        }
    }

    /// Execute one monitoring pass.
    pub async fn run(&self) {
        tracing::info!("monitoring run started");

        let store_ok = self.check_store().await;
        let app_ok = self.check_app().await;
        let healthy = store_ok && app_ok;

        if let Some(metrics) = self.fetch_metrics().await {
            self.send_report(healthy, &metrics).await;
        }

        tracing::info!(healthy, "monitoring run finished");
    }

    /// Step 1: trivial store read.
    async fn check_store(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => {
                tracing::info!("store reachable");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "store check failed");
                self.notify(
                    "Database check failed",
                    &format!("Metrics store unreachable: {e}"),
                    ReportLevel::Error,
                )
                .await;
                false
            }
        }
    }

    /// Step 2: bounded GET against the monitored application.
    async fn check_app(&self) -> bool {
        let Some(url) = self.app_url.as_deref() else {
            tracing::warn!("app URL not configured, skipping reachability probe");
            return true;
        };

        match probe_app(&self.http, url, self.probe_timeout).await {
            Ok(()) => {
                tracing::info!(%url, "app reachable");
                true
            }
            Err(failure) => {
                tracing::error!(%url, error = %failure, "app check failed");
                self.notify(
                    "Application check failed",
                    &format!("Application {failure}"),
                    ReportLevel::Error,
                )
                .await;
                false
            }
        }
    }

    /// Step 3: read the snapshot, synthesizing and persisting one when the
    /// path is empty.
    ///
    /// The synthesized values are a placeholder until real telemetry lands;
    /// a persisted snapshot is reused on later runs, never regenerated.
    async fn fetch_metrics(&self) -> Option<MetricsSnapshot> {
        let existing = match self.store.read_metrics().await {
            Ok(m) => m,
            Err(e) => {
                tracing::error!(error = %e, "metrics read failed");
                return None;
            }
        };

        if let Some(metrics) = existing {
            tracing::info!(users = metrics.users, "metrics retrieved");
            return Some(metrics);
        }

        let metrics = synthesize_metrics();
        match self.store.write_metrics(&metrics).await {
            Ok(()) => tracing::info!(users = metrics.users, "synthesized metrics persisted"),
            Err(e) => {
                tracing::error!(error = %e, "metrics write failed");
                return None;
            }
        }
        Some(metrics)
    }

    /// Step 4: one summary record combining overall health and the snapshot.
    async fn send_report(&self, healthy: bool, metrics: &MetricsSnapshot) {
        let overall = if healthy {
            "System operational"
        } else {
            "Problems detected"
        };
        let report = format!(
            "Status: {overall}\n\
             Users: {}\n\
             Page views: {}\n\
             Errors: {}\n\
             Load time: {}s\n\
             Reported at: {}",
            metrics.users,
            metrics.page_views,
            metrics.errors,
            metrics.load_time_seconds,
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        );

        let level = if healthy {
            ReportLevel::Info
        } else {
            ReportLevel::Error
        };
        self.notify("Monitoring report", &report, level).await;
    }

    /// Best-effort sink notification; a sink failure is logged and swallowed
    /// so one broken collaborator cannot take down the whole pass.
    async fn notify(&self, title: &str, message: &str, level: ReportLevel) {
        let (status, progress) = match level {
            ReportLevel::Info => (RecordStatus::Done, 100),
            ReportLevel::Error => (RecordStatus::Error, 0),
        };
        let record = TrackedRecord {
            title: title.to_string(),
            status,
            progress,
            description: message.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        if let Err(e) = self.sink.create_record(&record).await {
            tracing::error!(error = %e, %title, "sink notification failed");
        }
    }
}

/// Bounded GET against a monitored endpoint. Transport failures and
/// non-success statuses both surface as `Unreachable`; only reachability
/// matters, the body is ignored.
pub async fn probe_app(http: &reqwest::Client, url: &str, timeout: Duration) -> Result<()> {
    let resp = http
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| TrackWireError::Unreachable(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(TrackWireError::Unreachable(format!("status {status}")));
    }
    Ok(())
}

fn synthesize_metrics() -> MetricsSnapshot {
    let mut rng = rand::thread_rng();
    MetricsSnapshot {
        users: rng.gen_range(50..150),
        page_views: rng.gen_range(500..1500),
        errors: rng.gen_range(0..5),
        load_time_seconds: (rng.gen_range(1.0..3.0f64) * 100.0).round() / 100.0,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
