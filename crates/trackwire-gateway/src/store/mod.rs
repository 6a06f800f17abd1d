//! Realtime metrics store.
//!
//! `MetricsStore` is the seam the monitor depends on; `FirebaseStore` talks to
//! the RTDB REST surface. Only two paths are touched: the root (health probe)
//! and `/metrics`.

pub mod firebase;

use async_trait::async_trait;

use trackwire_core::error::Result;
use trackwire_core::record::MetricsSnapshot;

pub use firebase::FirebaseStore;

#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Trivial root read used as a health probe.
    async fn ping(&self) -> Result<()>;

    /// Read the metrics snapshot. An absent path is `Ok(None)`, not an error.
    async fn read_metrics(&self) -> Result<Option<MetricsSnapshot>>;

    async fn write_metrics(&self, snapshot: &MetricsSnapshot) -> Result<()>;
}
