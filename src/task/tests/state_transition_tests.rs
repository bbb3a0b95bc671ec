//! Unit tests for the status workflow guard.

use super::fixtures::{FixedClock, dt, fields};
use crate::task::domain::{InvalidTransitionError, Task, TaskStatus};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock(dt("2024-01-01T00:00:00Z"))
}

#[rstest]
#[case(TaskStatus::Pending, TaskStatus::Pending, true)]
#[case(TaskStatus::Pending, TaskStatus::InProgress, true)]
#[case(TaskStatus::Pending, TaskStatus::Completed, false)]
#[case(TaskStatus::InProgress, TaskStatus::Pending, true)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, true)]
#[case(TaskStatus::InProgress, TaskStatus::Completed, true)]
#[case(TaskStatus::Completed, TaskStatus::Pending, true)]
#[case(TaskStatus::Completed, TaskStatus::InProgress, true)]
#[case(TaskStatus::Completed, TaskStatus::Completed, true)]
fn can_transition_to_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
fn ensure_transition_reports_offending_pair() {
    let result = TaskStatus::Pending.ensure_transition_to(TaskStatus::Completed);
    assert_eq!(
        result,
        Err(InvalidTransitionError {
            from: TaskStatus::Pending,
            to: TaskStatus::Completed,
        })
    );
}

#[rstest]
fn forbidden_transition_message_is_stable() {
    let error = InvalidTransitionError {
        from: TaskStatus::Pending,
        to: TaskStatus::Completed,
    };
    assert_eq!(
        error.to_string(),
        "Cannot change status directly from Pending to Completed"
    );
}

#[rstest]
fn update_rejecting_transition_leaves_task_untouched(clock: FixedClock) {
    let mut task = Task::create(fields("Guarded", TaskStatus::Pending, "2024-06-01"), &clock);
    let history_before = task.history().len();

    let mut proposed = fields("Guarded", TaskStatus::Completed, "2024-06-01");
    proposed.tags = task.tags().clone();
    let result = task.apply_update(proposed, &clock);

    assert_eq!(
        result,
        Err(InvalidTransitionError {
            from: TaskStatus::Pending,
            to: TaskStatus::Completed,
        })
    );
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.history().len(), history_before);
}

#[rstest]
fn pending_reaches_completed_through_in_progress(clock: FixedClock) {
    let mut task = Task::create(fields("Stepwise", TaskStatus::Pending, "2024-06-01"), &clock);

    let step = fields("Stepwise", TaskStatus::InProgress, "2024-06-01");
    assert!(task.apply_update(step, &clock).expect("allowed transition"));

    let done = fields("Stepwise", TaskStatus::Completed, "2024-06-01");
    assert!(task.apply_update(done, &clock).expect("allowed transition"));

    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.history().len(), 3);
}

#[rstest]
fn same_status_update_is_permitted_and_appends_nothing(clock: FixedClock) {
    let mut task = Task::create(fields("Idle", TaskStatus::InProgress, "2024-06-01"), &clock);

    let unchanged = fields("Idle", TaskStatus::InProgress, "2024-06-01");
    let changed = task.apply_update(unchanged, &clock).expect("no-op allowed");

    assert!(!changed);
    assert_eq!(task.history().len(), 1);
}
