//! Append-only audit history for task records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// History text recorded when a task is created.
pub const CREATED_CHANGE: &str = "Task has been created";

/// History text recorded when a task is soft-deleted.
pub const DELETED_CHANGE: &str = "Task has been deleted";

/// History text recorded when a soft-deleted task is restored.
pub const RESTORED_CHANGE: &str = "Task has been restored";

/// Single entry in a task's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    change: String,
    date: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates a history entry with the given change text and timestamp.
    #[must_use]
    pub fn new(change: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            change: change.into(),
            date,
        }
    }

    /// Creates the entry seeded into a newly created task.
    #[must_use]
    pub fn created(date: DateTime<Utc>) -> Self {
        Self::new(CREATED_CHANGE, date)
    }

    /// Creates the entry appended when a task is soft-deleted.
    #[must_use]
    pub fn deleted(date: DateTime<Utc>) -> Self {
        Self::new(DELETED_CHANGE, date)
    }

    /// Creates the entry appended when a task is restored.
    #[must_use]
    pub fn restored(date: DateTime<Utc>) -> Self {
        Self::new(RESTORED_CHANGE, date)
    }

    /// Returns the human-readable change text.
    #[must_use]
    pub fn change(&self) -> &str {
        &self.change
    }

    /// Returns the timestamp the change was recorded at.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Ordered, append-only sequence of [`HistoryEntry`] values.
///
/// The API exposes no way to remove or reorder entries; the audit trail only
/// grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct ChangeLog(Vec<HistoryEntry>);

impl ChangeLog {
    /// Creates a change log holding a single initial entry.
    #[must_use]
    pub fn seeded(entry: HistoryEntry) -> Self {
        Self(vec![entry])
    }

    /// Appends an entry to the end of the log.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.0.push(entry);
    }

    /// Returns the entries oldest-first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reports whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for ChangeLog {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }
}

impl From<ChangeLog> for Vec<HistoryEntry> {
    fn from(log: ChangeLog) -> Self {
        log.0
    }
}
