//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Task title.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub title: String,
    /// Optional description.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub description: Option<String>,
    /// Workflow status.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Priority level.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub priority: String,
    /// Due date.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub due_date: DateTime<Utc>,
    /// Deduplicated tags.
    #[diesel(sql_type = diesel::sql_types::Array<diesel::sql_types::Text>)]
    pub tags: Vec<String>,
    /// Audit history as a JSON array.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub history: Value,
    /// Soft-delete marker.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Deduplicated tags.
    pub tags: Vec<String>,
    /// Audit history as a JSON array.
    pub history: Value,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset rewriting the full mutable state of a task row.
///
/// `treat_none_as_null` keeps a cleared description cleared instead of
/// silently skipping the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Deduplicated tags.
    pub tags: Vec<String>,
    /// Audit history as a JSON array.
    pub history: Value,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
