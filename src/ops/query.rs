//! Read-only predicates, counts, and filters.

use crate::models::{Deadline, Task};

/// Whether every task has at least one assignee.
///
/// An empty slice is vacuously fully assigned.
pub fn has_all_tasks_assigned(tasks: &[Task]) -> bool {
    tasks.iter().all(Task::is_assigned)
}

/// Whether any task is due strictly after `deadline`.
pub fn has_task_with_deadline_after(tasks: &[Task], deadline: Deadline) -> bool {
    tasks.iter().any(|t| t.deadline > deadline)
}

/// Number of tasks due strictly before `deadline`.
pub fn count_tasks_with_deadlines_before(tasks: &[Task], deadline: Deadline) -> usize {
    tasks.iter().filter(|t| t.deadline < deadline).count()
}

/// Copies of the tasks with the given priority, in their original order.
pub fn get_tasks_with_priority(tasks: &[Task], priority: i32) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.priority == priority)
        .cloned()
        .collect()
}
