//! Input validation for task operations.
//!
//! Raw payload types mirror the JSON bodies and query strings the
//! surrounding service receives; the rule functions in [`rules`] normalise
//! them into domain values or fail with a [`ValidationError`] carrying the
//! exact message the API contract promises.
//!
//! [`ValidationError`]: crate::task::domain::ValidationError

pub mod rules;

use serde::Deserialize;
use serde_json::Value;

/// Raw create/update payload as received from the transport layer.
///
/// All fields are optional at this level; required-field checks are a
/// validation rule, not a deserialisation failure, so the caller gets the
/// contract's error message instead of a serde error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status name.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority name; defaults to `Medium` when omitted.
    #[serde(default)]
    pub priority: Option<String>,
    /// Due date in ISO-8601 form.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Tags; must be a JSON array of strings when present.
    #[serde(default)]
    pub tags: Option<Value>,
}

impl TaskPayload {
    /// Creates a payload with the three required fields set.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        status: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            status: Some(status.into()),
            priority: None,
            due_date: Some(due_date.into()),
            tags: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the tags from a list of strings.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(Value::from(tags.into_iter().collect::<Vec<String>>()));
        self
    }

    /// Sets the tags from a raw JSON value.
    #[must_use]
    pub fn with_raw_tags(mut self, tags: Value) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Raw listing parameters as received from the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    /// Status name to match exactly.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority name to match exactly.
    #[serde(default)]
    pub priority: Option<String>,
    /// Tags the task's tag set must contain.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Inclusive lower due-date bound; requires `end_date`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive upper due-date bound; requires `start_date`.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl ListTasksQuery {
    /// Creates an unrestricted query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
            tags: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Restricts results to the given status name.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts results to the given priority name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Restricts results to tasks carrying every given tag.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Restricts results to due dates inside `[start, end]`.
    #[must_use]
    pub fn with_date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }
}
