//! External tracking sink.
//!
//! `TrackingSink` is the capability seam the webhook handler and the monitor
//! depend on; `NotionSink` is the production implementation. Records are
//! create-only: nothing in this system updates or deletes sink entries.

pub mod notion;

use async_trait::async_trait;

use trackwire_core::error::Result;
use trackwire_core::record::TrackedRecord;

pub use notion::{DatabaseInfo, NotionSink, PropertyInfo};

#[async_trait]
pub trait TrackingSink: Send + Sync {
    /// Create one record in the external tracking database.
    async fn create_record(&self, record: &TrackedRecord) -> Result<()>;
}
