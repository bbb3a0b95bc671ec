//! Task aggregate root.

use super::{
    ChangeLog, HistoryEntry, InvalidTransitionError, TagSet, TaskDescription, TaskId, TaskPriority,
    TaskStatus, TaskTitle, diff,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Normalised field values for creating or updating a task.
///
/// Produced by the validation rules; the aggregate never sees raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Validated title.
    pub title: TaskTitle,
    /// Validated optional description.
    pub description: Option<TaskDescription>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority level.
    pub priority: TaskPriority,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Deduplicated tags.
    pub tags: TagSet,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted field values.
    pub fields: TaskFields,
    /// Persisted audit history.
    pub history: ChangeLog,
    /// Persisted soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// Fields are private; all mutation goes through methods that keep the audit
/// trail in lockstep with the field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<TaskDescription>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: DateTime<Utc>,
    tags: TagSet,
    history: ChangeLog,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new active task from validated fields.
    ///
    /// The history is seeded with a single "created" entry stamped with the
    /// clock's current instant.
    #[must_use]
    pub fn create(fields: TaskFields, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            due_date: fields.due_date,
            tags: fields.tags,
            history: ChangeLog::seeded(HistoryEntry::created(timestamp)),
            deleted_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.fields.title,
            description: data.fields.description,
            status: data.fields.status,
            priority: data.fields.priority,
            due_date: data.fields.due_date,
            tags: data.fields.tags,
            history: data.history,
            deleted_at: data.deleted_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the audit history.
    #[must_use]
    pub const fn history(&self) -> &ChangeLog {
        &self.history
    }

    /// Returns the soft-delete timestamp, if the task is deleted.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Reports whether the task is soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies an update to the task, recording the change in the history.
    ///
    /// The status transition guard runs first, then the change diff. When the
    /// diff is empty no field is touched and no history entry is appended;
    /// the return value reports whether anything changed so callers can skip
    /// the storage write.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] when the proposed status change is
    /// forbidden. The task is left untouched on error.
    pub fn apply_update(
        &mut self,
        fields: TaskFields,
        clock: &impl Clock,
    ) -> Result<bool, InvalidTransitionError> {
        self.status.ensure_transition_to(fields.status)?;

        let change = diff::changes(self, &fields);
        if change.is_empty() {
            return Ok(false);
        }

        let timestamp = clock.utc();
        self.title = fields.title;
        self.description = fields.description;
        self.status = fields.status;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
        self.tags = fields.tags;
        self.history.append(HistoryEntry::new(change, timestamp));
        self.updated_at = timestamp;
        Ok(true)
    }

    /// Marks the task as soft-deleted, recording `entry` in the history.
    ///
    /// Scope checks belong to the caller; this method keeps the marker and
    /// the history entry in lockstep on the aggregate.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>, entry: HistoryEntry) {
        self.deleted_at = Some(at);
        self.history.append(entry);
        self.updated_at = at;
    }

    /// Clears the soft-delete marker, returning the task to the active scope.
    pub fn mark_restored(&mut self, at: DateTime<Utc>, entry: HistoryEntry) {
        self.deleted_at = None;
        self.history.append(entry);
        self.updated_at = at;
    }
}
