//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        ChangeLog, HistoryEntry, PersistedTaskData, Scope, TagSet, Task, TaskDescription,
        TaskFields, TaskFilter, TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::Value;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Columns returned by the raw soft-delete and restore statements.
const RETURNING_COLUMNS: &str = concat!(
    "RETURNING id, title, description, status, priority, due_date, tags, ",
    "history, deleted_at, created_at, updated_at",
);

/// `PostgreSQL`-backed task repository.
///
/// Soft delete and restore run as single `UPDATE ... RETURNING` statements
/// guarded on the current scope, so the deletion marker and the history
/// append are atomic and a task in the wrong scope simply matches no row.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_matching(
        &self,
        filter: &TaskFilter,
        scope: Scope,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let conditions = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = scoped(tasks::table.into_boxed(), scope);

            if let Some(status) = conditions.status() {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(priority) = conditions.priority() {
                query = query.filter(tasks::priority.eq(priority.as_str()));
            }
            if let Some(required) = conditions.tags() {
                query = query.filter(tasks::tags.contains(required.as_slice().to_vec()));
            }
            if let Some(range) = conditions.due_range() {
                query = query
                    .filter(tasks::due_date.ge(range.start()))
                    .filter(tasks::due_date.le(range.end()));
            }

            let rows = query
                .order((tasks::due_date.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId, scope: Scope) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = scoped(tasks::table.into_boxed(), scope)
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
        entry: HistoryEntry,
    ) -> TaskRepositoryResult<Option<Task>> {
        let appended = history_append_value(entry)?;
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(format!(
                "UPDATE tasks \
                 SET deleted_at = $2, updated_at = $2, history = history || $3 \
                 WHERE id = $1 AND deleted_at IS NULL {RETURNING_COLUMNS}",
            ))
            .bind::<diesel::sql_types::Uuid, _>(id.into_inner())
            .bind::<diesel::sql_types::Timestamptz, _>(deleted_at)
            .bind::<diesel::sql_types::Jsonb, _>(appended)
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn restore(
        &self,
        id: TaskId,
        restored_at: DateTime<Utc>,
        entry: HistoryEntry,
    ) -> TaskRepositoryResult<Option<Task>> {
        let appended = history_append_value(entry)?;
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(format!(
                "UPDATE tasks \
                 SET deleted_at = NULL, updated_at = $2, history = history || $3 \
                 WHERE id = $1 AND deleted_at IS NOT NULL {RETURNING_COLUMNS}",
            ))
            .bind::<diesel::sql_types::Uuid, _>(id.into_inner())
            .bind::<diesel::sql_types::Timestamptz, _>(restored_at)
            .bind::<diesel::sql_types::Jsonb, _>(appended)
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

type BoxedTaskQuery<'a> = tasks::BoxedQuery<'a, diesel::pg::Pg>;

fn scoped(query: BoxedTaskQuery<'_>, scope: Scope) -> BoxedTaskQuery<'_> {
    match scope {
        Scope::Active => query.filter(tasks::deleted_at.is_null()),
        Scope::Deleted => query.filter(tasks::deleted_at.is_not_null()),
    }
}

fn history_append_value(entry: HistoryEntry) -> TaskRepositoryResult<Value> {
    serde_json::to_value(vec![entry]).map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &Task) -> TaskRepositoryResult<NewTaskRow> {
    let history =
        serde_json::to_value(task.history().clone()).map_err(TaskRepositoryError::persistence)?;
    Ok(NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|d| d.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date(),
        tags: task.tags().as_slice().to_vec(),
        history,
        deleted_at: task.deleted_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

fn to_changeset(task: &Task) -> TaskRepositoryResult<TaskChangeset> {
    let history =
        serde_json::to_value(task.history().clone()).map_err(TaskRepositoryError::persistence)?;
    Ok(TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().map(|d| d.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date(),
        tags: task.tags().as_slice().to_vec(),
        history,
        deleted_at: task.deleted_at(),
        updated_at: task.updated_at(),
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::persistence)?;
    let description = row
        .description
        .map(TaskDescription::new)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority =
        TaskPriority::try_from(row.priority.as_str()).map_err(TaskRepositoryError::persistence)?;
    let history: Vec<HistoryEntry> =
        serde_json::from_value(row.history).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        fields: TaskFields {
            title,
            description,
            status,
            priority,
            due_date: row.due_date,
            tags: TagSet::from(row.tags),
        },
        history: ChangeLog::from(history),
        deleted_at: row.deleted_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}
