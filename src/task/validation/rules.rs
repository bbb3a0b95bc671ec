//! Individual validation rule implementations.
//!
//! Each rule is a pure function that normalises one aspect of a raw payload
//! into a domain value, returning a [`ValidationError`] with the contract's
//! message on failure. Rules never touch storage; every rule applicable to
//! an operation runs before the service issues a storage call.

use super::{ListTasksQuery, TaskPayload};
use crate::task::domain::{
    DateRange, TagSet, TaskDescription, TaskFields, TaskFilter, TaskId, TaskPriority, TaskStatus,
    TaskTitle, ValidationError,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Normalises a raw payload into validated task fields.
///
/// # Errors
///
/// Returns [`ValidationError::MissingRequiredFields`] when title, status, or
/// due date is absent or blank, and the specific field error for any value
/// that fails its own rule.
pub fn normalize_payload(payload: &TaskPayload) -> Result<TaskFields, ValidationError> {
    let raw_title = require(payload.title.as_deref())?;
    let raw_status = require(payload.status.as_deref())?;
    let raw_due_date = require(payload.due_date.as_deref())?;

    let title = TaskTitle::new(raw_title)?;
    let description = normalize_description(payload.description.as_deref())?;
    let status = TaskStatus::try_from(raw_status)?;
    let priority = normalize_priority(payload.priority.as_deref())?;
    let due_date = parse_due_date(raw_due_date)?;
    let tags = parse_tags(payload.tags.as_ref())?;

    Ok(TaskFields {
        title,
        description,
        status,
        priority,
        due_date,
        tags,
    })
}

/// Checks that a due date lies strictly after `now`.
///
/// Applied on the create path only; updates intentionally accept past due
/// dates to match the historical behaviour of the service.
///
/// # Errors
///
/// Returns [`ValidationError::DueDateNotInFuture`] otherwise.
pub fn require_future_due_date(
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if due_date > now {
        Ok(())
    } else {
        Err(ValidationError::DueDateNotInFuture)
    }
}

/// Parses a task identifier string.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTaskId`] when the value is empty or not
/// a well-formed UUID.
pub fn parse_task_id(value: &str) -> Result<TaskId, ValidationError> {
    TaskId::parse(value)
}

/// Parses a due-date string.
///
/// Accepts RFC 3339 datetimes, naive datetimes, and bare `YYYY-MM-DD` dates
/// (interpreted as midnight UTC), matching the formats the original service
/// accepted.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDueDate`] for anything else.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    parse_date(value).ok_or(ValidationError::InvalidDueDate)
}

/// Normalises a raw tags value into a deduplicated [`TagSet`].
///
/// An absent value yields an empty set. A present value must be a JSON array
/// of strings; duplicates collapse to the first occurrence.
///
/// # Errors
///
/// Returns [`ValidationError::TagsNotAnArray`] when the value is present but
/// not an array of strings.
pub fn parse_tags(value: Option<&Value>) -> Result<TagSet, ValidationError> {
    let Some(value) = value else {
        return Ok(TagSet::new());
    };
    let Value::Array(items) = value else {
        return Err(ValidationError::TagsNotAnArray);
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(tag) => Ok(tag.clone()),
            _ => Err(ValidationError::TagsNotAnArray),
        })
        .collect()
}

/// Builds a listing filter from raw query parameters.
///
/// # Errors
///
/// Returns the corresponding [`ValidationError`] when the status or priority
/// name is unknown, when only one date-range bound is supplied or a bound is
/// unparsable, or when the range is inverted.
pub fn build_filter(query: &ListTasksQuery) -> Result<TaskFilter, ValidationError> {
    let mut filter = TaskFilter::new();

    if let Some(status) = query.status.as_deref() {
        filter = filter.with_status(TaskStatus::try_from(status)?);
    }
    if let Some(priority) = query.priority.as_deref() {
        filter = filter.with_priority(TaskPriority::try_from(priority)?);
    }
    if let Some(tags) = query.tags.as_ref() {
        filter = filter.with_tags(tags.iter().cloned().collect());
    }
    if let Some(range) = parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())? {
        filter = filter.with_due_range(range);
    }

    Ok(filter)
}

/// Parses an optional date-range pair.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDateRange`] when only one bound is
/// supplied or either bound fails to parse, and
/// [`ValidationError::InvertedDateRange`] when the parsed range ends on or
/// before its start.
pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Option<DateRange>, ValidationError> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(raw_start), Some(raw_end)) => {
            let parsed_start = parse_date(raw_start).ok_or(ValidationError::InvalidDateRange)?;
            let parsed_end = parse_date(raw_end).ok_or(ValidationError::InvalidDateRange)?;
            DateRange::new(parsed_start, parsed_end).map(Some)
        }
        _ => Err(ValidationError::InvalidDateRange),
    }
}

fn require(value: Option<&str>) -> Result<&str, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingRequiredFields),
    }
}

fn normalize_description(
    value: Option<&str>,
) -> Result<Option<TaskDescription>, ValidationError> {
    match value {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => TaskDescription::new(value).map(Some),
    }
}

fn normalize_priority(value: Option<&str>) -> Result<TaskPriority, ValidationError> {
    value.map_or(Ok(TaskPriority::default()), TaskPriority::try_from)
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
