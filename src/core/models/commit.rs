//! Commit messages and per-repository outcomes

use chrono::NaiveDateTime;
use serde::Serialize;

/// Prefix of every commit message the publisher creates
pub const COMMIT_MESSAGE_PREFIX: &str = "Site updated: ";

/// `strftime` format of the commit timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the commit message for a publish at `at`
///
/// ```
/// use chrono::NaiveDate;
/// use sitepub::core::models::commit_message;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(7, 5, 0)
///     .unwrap();
/// assert_eq!(commit_message(at), "Site updated: 2024-03-09 07:05:00");
/// ```
#[must_use]
pub fn commit_message(at: NaiveDateTime) -> String {
    format!("{COMMIT_MESSAGE_PREFIX}{}", at.format(TIMESTAMP_FORMAT))
}

/// Result of a commit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    /// A new commit was created
    Committed,
    /// The working tree had no changes; nothing was committed
    NothingToCommit,
}

/// What happened to one repository during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoOutcome {
    /// Remote that was pushed to
    pub remote: String,
    /// Remote branch that was pushed to
    pub branch: String,
    /// Commit message used (or that would have been used)
    pub message: String,
    /// Whether a commit was actually created
    pub commit: CommitOutcome,
}
