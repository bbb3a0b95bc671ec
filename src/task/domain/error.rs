//! Error types for task domain validation and lifecycle rules.

use super::TaskStatus;
use thiserror::Error;

/// Errors returned while normalising raw task input.
///
/// The `Display` output of each variant is part of the public API contract:
/// callers surface these messages verbatim in their failure responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of the required fields is missing or blank.
    #[error("Title or Status or DueDate are empty")]
    MissingRequiredFields,

    /// The title is shorter than the three-character minimum.
    #[error("Title must be at least 3 characters")]
    TitleTooShort,

    /// The description exceeds the 500-character maximum.
    #[error("Description must be a maximum of 500 characters")]
    DescriptionTooLong,

    /// The status value is not a member of the status enum.
    #[error("'{0}' is not supported as a status value")]
    UnsupportedStatus(String),

    /// The priority value is not a member of the priority enum.
    #[error("'{0}' is not supported as a priority value")]
    UnsupportedPriority(String),

    /// The tags payload is not a JSON array of strings.
    #[error("Tags property is not an array")]
    TagsNotAnArray,

    /// The due date could not be parsed.
    #[error("DueDate has not a valid format")]
    InvalidDueDate,

    /// The due date is not strictly in the future at creation time.
    #[error("Due date must be in the future")]
    DueDateNotInFuture,

    /// A date-range bound is missing or unparsable.
    #[error("StartDate or EndDate have not a valid format")]
    InvalidDateRange,

    /// The date range ends on or before it starts.
    #[error("EndDate cannot be equal to or earlier than StartDate")]
    InvertedDateRange,

    /// The task identifier is not a well-formed UUID.
    #[error("Task ID is invalid or empty")]
    InvalidTaskId,
}

/// Error returned when a status change violates the workflow guard.
///
/// The only forbidden transition is a direct jump from [`TaskStatus::Pending`]
/// to [`TaskStatus::Completed`]; every other pair, including same-status
/// updates, is allowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Cannot change status directly from {from} to {to}")]
pub struct InvalidTransitionError {
    /// The status the task currently holds.
    pub from: TaskStatus,
    /// The status the update proposed.
    pub to: TaskStatus,
}
