//! Record and metrics data model shared by the sink and the store clients.

use serde::{Deserialize, Serialize};

use crate::classify::CommitStatus;

/// Number of leading characters of the commit message carried in a record
/// title.
const TITLE_MESSAGE_CHARS: usize = 50;

/// Status column values for a tracked record. `Error` only appears on
/// monitoring reports, never from commit classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    InProgress,
    Done,
    Error,
}

impl RecordStatus {
    /// Label written to the sink's status select column.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::InProgress => "In Progress",
            RecordStatus::Done => "Done",
            RecordStatus::Error => "Error",
        }
    }
}

impl From<CommitStatus> for RecordStatus {
    fn from(s: CommitStatus) -> Self {
        match s {
            CommitStatus::InProgress => RecordStatus::InProgress,
            CommitStatus::Done => RecordStatus::Done,
        }
    }
}

/// One entry written to the external tracking database. Created once per
/// event; there is no update or delete path anywhere in this system.
#[derive(Debug, Clone)]
pub struct TrackedRecord {
    pub title: String,
    pub status: RecordStatus,
    /// Always within 0..=100.
    pub progress: u8,
    pub description: String,
    /// RFC 3339.
    pub timestamp: String,
}

/// Point-in-time application health numbers, as stored under the realtime
/// store's `/metrics` path. Field names follow the store's existing wire
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub users: u64,
    #[serde(rename = "pageViews")]
    pub page_views: u64,
    pub errors: u64,
    #[serde(rename = "loadTime")]
    pub load_time_seconds: f64,
    /// RFC 3339.
    pub timestamp: String,
}

/// Build a record title from a commit message: a fixed prefix plus the first
/// 50 characters.
///
/// The "..." suffix is appended even when the message was not truncated;
/// existing records in the sink carry the suffix unconditionally, so the
/// format is kept as-is.
pub fn commit_title(message: &str) -> String {
    let head: String = message.chars().take(TITLE_MESSAGE_CHARS).collect();
    format!("Commit: {head}...")
}
