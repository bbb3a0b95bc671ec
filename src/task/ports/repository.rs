//! Repository port for task persistence and scoped lookup.

use crate::task::domain::{HistoryEntry, Scope, Task, TaskFilter, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every mutating method is atomic with respect to the audit history and the
/// field values: no caller may ever observe a record whose history reflects
/// a change its fields do not, or vice versa. Implementations rely on their
/// storage engine's single-record atomic update to provide this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns tasks in `scope` matching `filter`, ordered by ascending due
    /// date with ascending task ID as the tie-break.
    async fn find_matching(
        &self,
        filter: &TaskFilter,
        scope: Scope,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier within the given scope.
    ///
    /// Returns `None` when no task in `scope` carries the identifier.
    async fn find_by_id(&self, id: TaskId, scope: Scope) -> TaskRepositoryResult<Option<Task>>;

    /// Persists the full state of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Atomically soft-deletes an active task: sets the deletion marker,
    /// appends `entry` to the history, and touches the update timestamp.
    ///
    /// Returns the updated task, or `None` when no active task carries the
    /// identifier (absent or already deleted).
    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
        entry: HistoryEntry,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Atomically restores a soft-deleted task: clears the deletion marker,
    /// appends `entry` to the history, and touches the update timestamp.
    ///
    /// Returns the updated task, or `None` when no deleted task carries the
    /// identifier (absent or still active).
    async fn restore(
        &self,
        id: TaskId,
        restored_at: DateTime<Utc>,
        entry: HistoryEntry,
    ) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
