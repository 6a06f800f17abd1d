//! Shared fakes for integration tests: a recording sink and an in-memory
//! store, substituted through the `TrackingSink`/`MetricsStore` seams.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use trackwire_core::error::{Result, TrackWireError};
use trackwire_core::record::{MetricsSnapshot, TrackedRecord};
use trackwire_gateway::sink::TrackingSink;
use trackwire_gateway::store::MetricsStore;

#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<TrackedRecord>>,
    fail: AtomicBool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_calls(&self) {
        self.fail.store(true, Ordering::Relaxed);
    }

    pub fn records(&self) -> Vec<TrackedRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackingSink for RecordingSink {
    async fn create_record(&self, record: &TrackedRecord) -> Result<()> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(TrackWireError::ExternalService("sink is down".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    metrics: Mutex<Option<MetricsSnapshot>>,
    ping_fails: AtomicBool,
    read_fails: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn break_ping(&self) {
        self.ping_fails.store(true, Ordering::Relaxed);
    }

    pub fn break_reads(&self) {
        self.read_fails.store(true, Ordering::Relaxed);
    }

    pub fn stored_metrics(&self) -> Option<MetricsSnapshot> {
        self.metrics.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricsStore for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        if self.ping_fails.load(Ordering::Relaxed) {
            return Err(TrackWireError::ExternalService("store is down".into()));
        }
        Ok(())
    }

    async fn read_metrics(&self) -> Result<Option<MetricsSnapshot>> {
        if self.read_fails.load(Ordering::Relaxed) {
            return Err(TrackWireError::ExternalService("store is down".into()));
        }
        Ok(self.metrics.lock().unwrap().clone())
    }

    async fn write_metrics(&self, snapshot: &MetricsSnapshot) -> Result<()> {
        *self.metrics.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}
