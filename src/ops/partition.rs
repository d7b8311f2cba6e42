//! Partitioning by deadline.
//!
//! Both operations are stable: tasks keep their relative order within each
//! group.

use std::mem;

use tracing::debug;

use crate::models::{Deadline, Task};

/// Moves every task due before `deadline` into `out`.
///
/// Extracted tasks are appended to `out` in their original order. Remaining
/// tasks (due on or after `deadline`) are compacted to the front of the
/// slice, also in their original order. Returns the new logical end of the
/// slice; positions from there on hold `Task::default()`.
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use task_algos::models::Task;
/// use task_algos::ops::extract_tasks_with_deadline_before;
///
/// let now = Utc::now();
/// let mut tasks: Vec<Task> = [6, 3, 7, 4, 5, 1]
///     .into_iter()
///     .map(|h| Task::new(h).with_deadline(now + TimeDelta::hours(h as i64)))
///     .collect();
///
/// let mut before: Vec<Task> = Vec::new();
/// let end = extract_tasks_with_deadline_before(&mut tasks, &mut before, now + TimeDelta::hours(5));
/// tasks.truncate(end);
///
/// assert_eq!(before.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 4, 1]);
/// assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![6, 7, 5]);
/// ```
pub fn extract_tasks_with_deadline_before<E>(
    tasks: &mut [Task],
    out: &mut E,
    deadline: Deadline,
) -> usize
where
    E: Extend<Task>,
{
    let mut end = 0;
    for i in 0..tasks.len() {
        if tasks[i].deadline < deadline {
            out.extend(Some(mem::take(&mut tasks[i])));
        } else {
            // slots in end..i are vacated, so the swap only moves a placeholder back
            tasks.swap(end, i);
            end += 1;
        }
    }
    debug!(extracted = tasks.len() - end, kept = end, "extracted tasks before deadline");
    end
}

/// Reorders tasks so that those due before `deadline` come first.
///
/// Stable partition. Returns the index of the last task in the first group,
/// or `None` if no task is due before `deadline`.
pub fn separate_by_deadline(tasks: &mut [Task], deadline: Deadline) -> Option<usize> {
    let taken: Vec<Task> = tasks.iter_mut().map(mem::take).collect();
    let (early, late): (Vec<Task>, Vec<Task>) =
        taken.into_iter().partition(|t| t.deadline < deadline);

    let split = early.len();
    for (slot, task) in tasks.iter_mut().zip(early.into_iter().chain(late)) {
        *slot = task;
    }
    split.checked_sub(1)
}
