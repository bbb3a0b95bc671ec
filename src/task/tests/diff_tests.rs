//! Unit tests for the change diff engine.

use super::fixtures::{FixedClock, dt, fields};
use crate::task::domain::{TagSet, Task, TaskDescription, TaskPriority, TaskStatus, diff};
use chrono::Duration;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock(dt("2024-01-01T00:00:00Z"))
}

#[rstest]
fn identical_fields_produce_empty_diff(clock: FixedClock) {
    let task = Task::create(fields("Baseline", TaskStatus::Pending, "2024-06-01"), &clock);
    let proposed = fields("Baseline", TaskStatus::Pending, "2024-06-01");

    assert_eq!(diff::changes(&task, &proposed), "");
}

#[rstest]
fn title_change_uses_contract_wording(clock: FixedClock) {
    let task = Task::create(fields("Old title", TaskStatus::Pending, "2024-06-01"), &clock);
    let mut proposed = fields("New title", TaskStatus::Pending, "2024-06-01");
    proposed.tags = task.tags().clone();

    assert_eq!(
        diff::changes(&task, &proposed),
        "Title changed from 'Old title' to 'New title'."
    );
}

#[rstest]
fn changed_fields_appear_in_fixed_order(clock: FixedClock) {
    let mut task = Task::create(fields("Ordered", TaskStatus::Pending, "2024-06-01"), &clock);
    let step = {
        let mut step = fields("Ordered", TaskStatus::Pending, "2024-06-01");
        step.tags = TagSet::from(vec!["a".to_owned()]);
        step
    };
    task.apply_update(step, &clock).expect("setup update");

    let mut proposed = fields("Reordered", TaskStatus::InProgress, "2024-06-01");
    proposed.priority = TaskPriority::High;
    proposed.tags = TagSet::from(vec!["b".to_owned()]);

    let rendered = diff::changes(&task, &proposed);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        [
            "Title changed from 'Ordered' to 'Reordered'.",
            "Status changed from 'Pending' to 'InProgress'.",
            "Priority changed from 'Medium' to 'High'.",
            "Tags changed from 'a' to 'b'.",
        ]
    );
}

#[rstest]
fn absent_description_compares_as_empty_string(clock: FixedClock) {
    let task = Task::create(fields("No desc", TaskStatus::Pending, "2024-06-01"), &clock);
    let proposed = fields("No desc", TaskStatus::Pending, "2024-06-01");

    // Both sides absent: no spurious line.
    assert_eq!(diff::changes(&task, &proposed), "");

    let mut with_description = fields("No desc", TaskStatus::Pending, "2024-06-01");
    with_description.description = Some(TaskDescription::new("Quarterly numbers").expect("valid"));
    assert_eq!(
        diff::changes(&task, &with_description),
        "Description changed from '' to 'Quarterly numbers'."
    );
}

#[rstest]
fn due_date_change_renders_iso_millis(clock: FixedClock) {
    let task = Task::create(fields("Dated", TaskStatus::Pending, "2024-06-01"), &clock);
    let proposed = fields("Dated", TaskStatus::Pending, "2024-07-15");

    assert_eq!(
        diff::changes(&task, &proposed),
        "DueDate changed from '2024-06-01T00:00:00.000Z' to '2024-07-15T00:00:00.000Z'."
    );
}

#[rstest]
fn sub_millisecond_due_date_jitter_is_not_a_change(clock: FixedClock) {
    let task = Task::create(fields("Jitter", TaskStatus::Pending, "2024-06-01"), &clock);
    let mut proposed = fields("Jitter", TaskStatus::Pending, "2024-06-01");
    proposed.due_date += Duration::microseconds(400);

    assert_eq!(diff::changes(&task, &proposed), "");
}

#[rstest]
fn one_millisecond_due_date_difference_is_a_change(clock: FixedClock) {
    let task = Task::create(fields("Precise", TaskStatus::Pending, "2024-06-01"), &clock);
    let mut proposed = fields("Precise", TaskStatus::Pending, "2024-06-01");
    proposed.due_date += Duration::milliseconds(1);

    assert_eq!(
        diff::changes(&task, &proposed),
        "DueDate changed from '2024-06-01T00:00:00.000Z' to '2024-06-01T00:00:00.001Z'."
    );
}

#[rstest]
fn tag_lists_render_comma_joined(clock: FixedClock) {
    let mut task = Task::create(fields("Tagged", TaskStatus::Pending, "2024-06-01"), &clock);
    let seed = {
        let mut seed = fields("Tagged", TaskStatus::Pending, "2024-06-01");
        seed.tags = TagSet::from(vec!["urgent".to_owned(), "review".to_owned()]);
        seed
    };
    task.apply_update(seed, &clock).expect("setup update");

    let mut proposed = fields("Tagged", TaskStatus::Pending, "2024-06-01");
    proposed.tags = TagSet::from(vec!["urgent".to_owned(), "backend".to_owned()]);

    assert_eq!(
        diff::changes(&task, &proposed),
        "Tags changed from 'urgent,review' to 'urgent,backend'."
    );
}

#[rstest]
fn duplicate_tags_in_proposal_compare_deduplicated(clock: FixedClock) {
    let mut task = Task::create(fields("Dup tags", TaskStatus::Pending, "2024-06-01"), &clock);
    let seed = {
        let mut seed = fields("Dup tags", TaskStatus::Pending, "2024-06-01");
        seed.tags = TagSet::from(vec!["urgent".to_owned()]);
        seed
    };
    task.apply_update(seed, &clock).expect("setup update");

    let mut proposed = fields("Dup tags", TaskStatus::Pending, "2024-06-01");
    proposed.tags = TagSet::from(vec!["urgent".to_owned(), "urgent".to_owned()]);

    assert_eq!(diff::changes(&task, &proposed), "");
}

#[rstest]
fn title_equality_is_case_sensitive(clock: FixedClock) {
    let task = Task::create(fields("case", TaskStatus::Pending, "2024-06-01"), &clock);
    let proposed = fields("Case", TaskStatus::Pending, "2024-06-01");

    assert_eq!(
        diff::changes(&task, &proposed),
        "Title changed from 'case' to 'Case'."
    );
}
