//! In-place edits of assignees and deadlines, and removal of finished tasks.

use chrono::{TimeDelta, Utc};
use tracing::debug;

use crate::error::{Result, TaskError};
use crate::models::{Deadline, Task, TaskId};

/// Removes `person` from every task's assignees.
///
/// Tasks without `person` are untouched; applying this twice has the same
/// effect as applying it once. Returns the number of tasks changed.
pub fn remove_assignee_from_all(tasks: &mut [Task], person: &str) -> usize {
    let changed = tasks
        .iter_mut()
        .map(|t| t.assignees.remove(person))
        .filter(|&removed| removed)
        .count();
    debug!(person, changed, "removed assignee");
    changed
}

/// Moves the deadline of every task with `priority` by `extension`.
///
/// `extension` may be negative. If any shifted deadline would overflow, no
/// task is modified. Returns the number of tasks changed.
pub fn extend_deadlines(tasks: &mut [Task], priority: i32, extension: TimeDelta) -> Result<usize> {
    let extended = tasks
        .iter()
        .filter(|t| t.priority == priority)
        .map(|t| {
            t.deadline
                .checked_add_signed(extension)
                .ok_or(TaskError::DeadlineOverflow { id: t.id })
        })
        .collect::<Result<Vec<Deadline>>>()?;

    let changed = extended.len();
    for (task, deadline) in tasks
        .iter_mut()
        .filter(|t| t.priority == priority)
        .zip(extended)
    {
        task.deadline = deadline;
    }

    debug!(priority, %extension, changed, "extended deadlines");
    Ok(changed)
}

/// Assigns `person` to the task with the given ID.
///
/// Only the first task with a matching ID is considered.
///
/// # Errors
/// - [`TaskError::NotFound`] if no task has `id`
/// - [`TaskError::AlreadyAssigned`] if `person` is already an assignee
pub fn add_assignee_to_task(
    tasks: &mut [Task],
    id: TaskId,
    person: impl Into<String>,
) -> Result<()> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TaskError::NotFound { id })?;

    let person = person.into();
    if task.is_assigned_to(&person) {
        return Err(TaskError::AlreadyAssigned { id, person });
    }
    task.assignees.insert(person);
    Ok(())
}

/// Removes every task due at or before the current system time.
///
/// Returns the number of tasks removed.
pub fn remove_all_finished(tasks: &mut Vec<Task>) -> usize {
    remove_all_finished_at(tasks, Utc::now())
}

/// Removes every task due at or before `now`, preserving the order of the rest.
///
/// Returns the number of tasks removed.
pub fn remove_all_finished_at(tasks: &mut Vec<Task>, now: Deadline) -> usize {
    let before = tasks.len();
    tasks.retain(|t| t.deadline > now);
    let removed = before - tasks.len();
    debug!(removed, remaining = tasks.len(), "removed finished tasks");
    removed
}
