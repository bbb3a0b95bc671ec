//! Listing filters for task queries.

use super::{TagSet, Task, TaskPriority, TaskStatus, ValidationError};
use chrono::{DateTime, Utc};

/// Whether a query targets active or soft-deleted tasks.
///
/// Exactly one scope applies to every lookup; the two are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Tasks with no soft-delete marker.
    Active,
    /// Tasks carrying a soft-delete marker.
    Deleted,
}

impl Scope {
    /// Reports whether `task` falls inside this scope.
    #[must_use]
    pub const fn includes(self, task: &Task) -> bool {
        match self {
            Self::Active => !task.is_deleted(),
            Self::Deleted => task.is_deleted(),
        }
    }
}

/// Inclusive due-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedDateRange`] when `end` is equal to
    /// or earlier than `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::InvertedDateRange);
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn start(self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn end(self) -> DateTime<Utc> {
        self.end
    }

    /// Reports whether `date` falls inside the range, bounds included.
    #[must_use]
    pub fn contains(self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Storage-agnostic description of a task listing query.
///
/// Each adapter translates the filter into its own query form; the in-memory
/// adapter evaluates [`TaskFilter::matches`] directly and the `PostgreSQL`
/// adapter compiles the same conditions into SQL. Results are ordered by
/// ascending due date with ascending task id as the deterministic tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    tags: Option<TagSet>,
    due_range: Option<DateRange>,
}

impl TaskFilter {
    /// Creates a filter matching every task in scope.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
            tags: None,
            due_range: None,
        }
    }

    /// Restricts matches to the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts matches to the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts matches to tasks whose tag set contains every given tag.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Restricts matches to due dates inside the given window.
    #[must_use]
    pub const fn with_due_range(mut self, range: DateRange) -> Self {
        self.due_range = Some(range);
        self
    }

    /// Returns the status restriction, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority restriction, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the required tags, if any.
    #[must_use]
    pub const fn tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }

    /// Returns the due-date window, if any.
    #[must_use]
    pub const fn due_range(&self) -> Option<DateRange> {
        self.due_range
    }

    /// Evaluates the filter against a single task.
    #[must_use]
    pub fn matches(&self, task: &Task, scope: Scope) -> bool {
        scope.includes(task)
            && self.status.is_none_or(|status| task.status() == status)
            && self
                .priority
                .is_none_or(|priority| task.priority() == priority)
            && self
                .tags
                .as_ref()
                .is_none_or(|required| task.tags().contains_all(required))
            && self
                .due_range
                .is_none_or(|range| range.contains(task.due_date()))
    }
}
