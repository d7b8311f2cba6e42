//! Built-in task orderings.
//!
//! All orderings are ascending on their key.

use super::TaskOrdering;
use crate::models::Task;
use std::cmp::Ordering;

/// Lexicographic order of task names.
#[derive(Debug, Clone, Copy)]
pub struct ByName;

impl TaskOrdering for ByName {
    fn name(&self) -> &'static str {
        "NAME"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.name.cmp(&b.name)
    }

    fn description(&self) -> &'static str {
        "Task name, lexicographic"
    }
}

/// Numeric order of task IDs.
#[derive(Debug, Clone, Copy)]
pub struct ById;

impl TaskOrdering for ById {
    fn name(&self) -> &'static str {
        "ID"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.id.cmp(&b.id)
    }

    fn description(&self) -> &'static str {
        "Task ID, ascending"
    }
}

/// Numeric order of priorities (lower value first).
#[derive(Debug, Clone, Copy)]
pub struct ByPriority;

impl TaskOrdering for ByPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    fn description(&self) -> &'static str {
        "Task priority, ascending"
    }
}

/// Chronological order of deadlines (earliest first).
#[derive(Debug, Clone, Copy)]
pub struct ByDeadline;

impl TaskOrdering for ByDeadline {
    fn name(&self) -> &'static str {
        "DEADLINE"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.deadline.cmp(&b.deadline)
    }

    fn description(&self) -> &'static str {
        "Earliest deadline first"
    }
}
