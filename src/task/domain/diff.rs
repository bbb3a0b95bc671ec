//! Change diff engine for task updates.
//!
//! Compares a stored task against proposed field values and renders the
//! differences as the human-readable text appended to the audit history.
//! The field order and line wording are a compatibility contract: audit
//! viewers match on literal substrings of these messages.

use super::{Task, TaskFields};
use chrono::{DateTime, SecondsFormat, Utc};

/// Renders the changes between `task` and `proposed` as history text.
///
/// Fields are compared in a fixed order (title, description, status,
/// priority, due date, tags); each differing field contributes one line of
/// the form `<Field> changed from '<old>' to '<new>'.` and lines are joined
/// with newlines. An empty string means nothing changed and no history entry
/// must be recorded.
#[must_use]
pub fn changes(task: &Task, proposed: &TaskFields) -> String {
    let mut lines: Vec<String> = Vec::new();

    if task.title() != &proposed.title {
        push_change(
            &mut lines,
            "Title",
            task.title().as_str(),
            proposed.title.as_str(),
        );
    }

    // Absent descriptions compare as the empty string so that omitting the
    // field on both sides never yields a spurious diff line.
    let old_description = task.description().map_or("", AsRef::as_ref);
    let new_description = proposed.description.as_ref().map_or("", AsRef::as_ref);
    if old_description != new_description {
        push_change(&mut lines, "Description", old_description, new_description);
    }

    if task.status() != proposed.status {
        push_change(
            &mut lines,
            "Status",
            task.status().as_str(),
            proposed.status.as_str(),
        );
    }

    if task.priority() != proposed.priority {
        push_change(
            &mut lines,
            "Priority",
            task.priority().as_str(),
            proposed.priority.as_str(),
        );
    }

    if due_dates_differ(task.due_date(), proposed.due_date) {
        push_change(
            &mut lines,
            "DueDate",
            &format_date(task.due_date()),
            &format_date(proposed.due_date),
        );
    }

    if task.tags() != &proposed.tags {
        push_change(
            &mut lines,
            "Tags",
            &task.tags().to_string(),
            &proposed.tags.to_string(),
        );
    }

    lines.join("\n")
}

/// Compares due dates by elapsed time in whole milliseconds.
///
/// Wire formats carry millisecond precision, so sub-millisecond jitter
/// introduced by reparsing must not register as a change.
fn due_dates_differ(old: DateTime<Utc>, new: DateTime<Utc>) -> bool {
    old.signed_duration_since(new).num_milliseconds() != 0
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn push_change(lines: &mut Vec<String>, field: &str, old: &str, new: &str) {
    lines.push(format!("{field} changed from '{old}' to '{new}'."));
}
