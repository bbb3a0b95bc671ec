//! Service layer orchestrating the task lifecycle operations.

use crate::task::{
    domain::{
        HistoryEntry, InvalidTransitionError, Scope, Task, ValidationError,
    },
    ports::{TaskRepository, TaskRepositoryError},
    validation::{ListTasksQuery, TaskPayload, rules},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
///
/// Each kind maps to the HTTP status the calling layer should surface; the
/// engine itself only deals in kind and message.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The proposed status change is forbidden.
    #[error(transparent)]
    Transition(#[from] InvalidTransitionError),

    /// No task exists in the scope the operation targets.
    #[error("Task not found")]
    NotFound,

    /// The storage collaborator failed; propagated without retry.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns the HTTP status code the calling layer should respond with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Transition(_) => 400,
            Self::NotFound => 404,
            Self::Repository(_) => 500,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each operation is a short synchronous sequence of validate, diff or
/// state-check, then a single storage call. The service holds no locks and
/// performs no retries; concurrent-update safety comes from the repository's
/// atomic single-record updates.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task from a raw payload.
    ///
    /// The stored task starts in the active scope with whatever status the
    /// payload supplies and a history seeded with a single "created" entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the payload fails a
    /// rule (including a due date not in the future) and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, payload: &TaskPayload) -> TaskLifecycleResult<Task> {
        let fields = rules::normalize_payload(payload)?;
        rules::require_future_due_date(fields.due_date, self.clock.utc())?;

        let task = Task::create(fields, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Lists tasks in the given scope matching the query.
    ///
    /// Results are ordered by ascending due date, ties broken by task ID. An
    /// invalid query fails before any storage call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for malformed filter
    /// parameters and [`TaskLifecycleError::Repository`] when the lookup
    /// fails.
    pub async fn list(
        &self,
        query: &ListTasksQuery,
        scope: Scope,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let filter = rules::build_filter(query)?;
        Ok(self.repository.find_matching(&filter, scope).await?)
    }

    /// Retrieves an active task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed identifier
    /// and [`TaskLifecycleError::NotFound`] when no active task matches —
    /// soft-deleted tasks are invisible here.
    pub async fn get(&self, id: &str) -> TaskLifecycleResult<Task> {
        let task_id = rules::parse_task_id(id)?;
        self.repository
            .find_by_id(task_id, Scope::Active)
            .await?
            .ok_or(TaskLifecycleError::NotFound)
    }

    /// Updates an active task from a raw payload.
    ///
    /// Validation and the status transition guard run before anything is
    /// written. The change diff decides whether a history entry is appended:
    /// a no-change update returns the stored task untouched without issuing
    /// a storage write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for malformed input,
    /// [`TaskLifecycleError::NotFound`] when no active task matches,
    /// [`TaskLifecycleError::Transition`] for a forbidden status change, and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(&self, id: &str, payload: &TaskPayload) -> TaskLifecycleResult<Task> {
        let task_id = rules::parse_task_id(id)?;
        let fields = rules::normalize_payload(payload)?;

        let mut task = self
            .repository
            .find_by_id(task_id, Scope::Active)
            .await?
            .ok_or(TaskLifecycleError::NotFound)?;

        let changed = task.apply_update(fields, &*self.clock)?;
        if changed {
            self.repository.save(&task).await?;
        }
        Ok(task)
    }

    /// Soft-deletes an active task.
    ///
    /// The record is marked with a deletion timestamp and a "deleted"
    /// history entry in one atomic storage update; it is never removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed identifier
    /// and [`TaskLifecycleError::NotFound`] when no active task matches
    /// (absent or already deleted).
    pub async fn delete(&self, id: &str) -> TaskLifecycleResult<()> {
        let task_id = rules::parse_task_id(id)?;
        let now = self.clock.utc();
        self.repository
            .soft_delete(task_id, now, HistoryEntry::deleted(now))
            .await?
            .ok_or(TaskLifecycleError::NotFound)?;
        Ok(())
    }

    /// Restores a soft-deleted task to the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed identifier
    /// and [`TaskLifecycleError::NotFound`] when no deleted task matches
    /// (absent or still active).
    pub async fn restore(&self, id: &str) -> TaskLifecycleResult<Task> {
        let task_id = rules::parse_task_id(id)?;
        let now = self.clock.utc();
        self.repository
            .restore(task_id, now, HistoryEntry::restored(now))
            .await?
            .ok_or(TaskLifecycleError::NotFound)
    }
}
