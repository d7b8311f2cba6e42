//! Task model.
//!
//! A task represents a unit of work with a cost, a deadline, and the set of
//! people assigned to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Task identifier. Unique within a collection by caller convention.
pub type TaskId = u64;

/// Absolute deadline of a task.
pub type Deadline = DateTime<Utc>;

/// A unit of work.
///
/// # Invariants
/// - `cost >= 0` (checked by [`crate::validation::validate_tasks`], not by the type)
/// - `assignees` holds no duplicates (set semantics)
///
/// `Task::default()` is the placeholder left behind in slots vacated by
/// moving operations such as [`crate::ops::extract_tasks_with_deadline_before`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: TaskId,
    /// Human-readable label. May be empty.
    pub name: String,
    /// Priority (lower value = higher precedence on tie-breaks).
    pub priority: i32,
    /// Non-negative cost.
    pub cost: f64,
    /// Latest completion time.
    pub deadline: Deadline,
    /// People assigned to this task.
    pub assignees: BTreeSet<String>,
}

impl Task {
    /// Creates a new task with the given ID.
    ///
    /// The deadline defaults to the Unix epoch; set it with [`Task::with_deadline`].
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Adds an assignee. Adding a person twice has no effect.
    pub fn with_assignee(mut self, person: impl Into<String>) -> Self {
        self.assignees.insert(person.into());
        self
    }

    /// Adds several assignees.
    pub fn with_assignees<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees.extend(people.into_iter().map(Into::into));
        self
    }

    /// Exchanges every field with `other`.
    pub fn swap(&mut self, other: &mut Task) {
        std::mem::swap(self, other);
    }

    /// Whether `person` is assigned to this task.
    #[inline]
    pub fn is_assigned_to(&self, person: &str) -> bool {
        self.assignees.contains(person)
    }

    /// Whether anyone is assigned to this task.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        !self.assignees.is_empty()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id, self.name, self.priority, self.cost
        )
    }
}
