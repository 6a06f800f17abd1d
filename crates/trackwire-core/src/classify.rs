//! Commit-message classification.
//!
//! Maps a commit message to a progress percentage and a coarse status by
//! case-insensitive keyword matching. The keyword table and the rule ordering
//! are part of the external contract: records already written to the sink were
//! produced by exactly these values.

/// Keyword point table. Matches are substring-based and may overlap; the
/// summed total is clamped to 100.
const KEYWORD_POINTS: [(&str, u32); 8] = [
    ("init", 10),
    ("setup", 15),
    ("feature", 30),
    ("fix", 5),
    ("refactor", 10),
    ("test", 20),
    ("deploy", 25),
    ("complete", 40),
];

/// Status produced by classification. Closed set; the monitoring path has a
/// separate Error level that never comes out of `classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    InProgress,
    Done,
}

impl CommitStatus {
    /// Label written to the sink's status column.
    pub fn as_str(self) -> &'static str {
        match self {
            CommitStatus::InProgress => "In Progress",
            CommitStatus::Done => "Done",
        }
    }
}

/// Result of classifying one commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Clamped to 0..=100.
    pub progress: u8,
    pub status: CommitStatus,
}

/// Sum the point values of every keyword present in the message, clamped
/// to 100. A message matching nothing scores 0.
pub fn progress(message: &str) -> u8 {
    let lower = message.to_lowercase();
    let total: u32 = KEYWORD_POINTS
        .iter()
        .filter(|(kw, _)| lower.contains(kw))
        .map(|(_, pts)| pts)
        .sum();
    total.min(100) as u8
}

/// Derive the status label from the message.
///
/// The error/fix rule is checked before the complete/deploy rule, so a message
/// containing both "fix" and "complete" stays in progress. First matching rule
/// wins; anything else defaults to in progress.
pub fn status(message: &str) -> CommitStatus {
    let lower = message.to_lowercase();
    if lower.contains("error") || lower.contains("fix") {
        return CommitStatus::InProgress;
    }
    if lower.contains("complete") || lower.contains("deploy") {
        return CommitStatus::Done;
    }
    CommitStatus::InProgress
}

/// Classify a commit message into progress and status. Pure.
pub fn classify(message: &str) -> Classification {
    Classification {
        progress: progress(message),
        status: status(message),
    }
}
