//! In-memory repository for task lifecycle tests and embedding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{HistoryEntry, Scope, Task, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mutations run under a write lock, which makes the history append and the
/// field change atomic with respect to concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_matching(
        &self,
        filter: &TaskFilter,
        scope: Scope,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| filter.matches(task, scope))
            .cloned()
            .collect();
        tasks.sort_by_key(|task| (task.due_date(), task.id()));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId, scope: Scope) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|task| scope.includes(task))
            .cloned())
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
        entry: HistoryEntry,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(task) = state.get_mut(&id).filter(|task| !task.is_deleted()) else {
            return Ok(None);
        };
        task.mark_deleted(deleted_at, entry);
        Ok(Some(task.clone()))
    }

    async fn restore(
        &self,
        id: TaskId,
        restored_at: DateTime<Utc>,
        entry: HistoryEntry,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(task) = state.get_mut(&id).filter(|task| task.is_deleted()) else {
            return Ok(None);
        };
        task.mark_restored(restored_at, entry);
        Ok(Some(task.clone()))
    }
}
