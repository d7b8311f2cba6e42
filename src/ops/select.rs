//! Ordered listings and selection.
//!
//! Completion order is deadline ascending with ties broken by priority
//! ascending (see [`OrderingChain::completion_order`]).

use crate::error::{Result, TaskError};
use crate::models::{Task, TaskId};
use crate::ordering::OrderingChain;

/// `(id, priority)` pair of a task.
pub type IdPriority = (TaskId, i32);

/// Lists `(id, priority)` of every task, sorted by priority then ID.
///
/// The slice itself is left sorted by the same key.
pub fn list_sorted_by_prio(tasks: &mut [Task]) -> Vec<IdPriority> {
    OrderingChain::priority_then_id().sort(tasks);
    tasks.iter().map(|t| (t.id, t.priority)).collect()
}

/// Returns the task at position `n` (0-based) in completion order.
///
/// The slice is not reordered.
///
/// # Errors
/// [`TaskError::OutOfRange`] if `n >= tasks.len()`.
pub fn get_nth_to_complete(tasks: &[Task], n: usize) -> Result<&Task> {
    if n >= tasks.len() {
        return Err(TaskError::OutOfRange {
            n,
            len: tasks.len(),
        });
    }

    let chain = OrderingChain::completion_order();
    let mut refs: Vec<&Task> = tasks.iter().collect();
    let (_, nth, _) = refs.select_nth_unstable_by(n, |a, b| chain.compare(a, b));
    Ok(*nth)
}

/// Copies of the first `n` tasks in completion order, sorted by it.
///
/// If `n` exceeds the number of tasks, every task is returned.
pub fn get_first_n_to_complete(tasks: &[Task], n: usize) -> Vec<Task> {
    let chain = OrderingChain::completion_order();
    let mut refs: Vec<&Task> = tasks.iter().collect();
    if n < refs.len() {
        refs.select_nth_unstable_by(n, |a, b| chain.compare(a, b));
        refs.truncate(n);
    }
    refs.sort_by(|a, b| chain.compare(a, b));
    refs.into_iter().cloned().collect()
}

/// Returns the cheapest and the most expensive task.
///
/// On equal cost the first cheapest and the last most expensive task win.
///
/// # Errors
/// [`TaskError::EmptyCollection`] if `tasks` is empty.
pub fn cheapest_and_most_expensive(tasks: &[Task]) -> Result<(&Task, &Task)> {
    let cheapest = tasks
        .iter()
        .min_by(|a, b| a.cost.total_cmp(&b.cost))
        .ok_or(TaskError::EmptyCollection)?;
    let most_expensive = tasks
        .iter()
        .max_by(|a, b| a.cost.total_cmp(&b.cost))
        .ok_or(TaskError::EmptyCollection)?;
    Ok((cheapest, most_expensive))
}
