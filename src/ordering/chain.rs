//! Ordering chain for multi-key task comparison.
//!
//! Composes several orderings: the first is the primary key, each following
//! one is consulted only when all previous ones tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, TaskOrdering};
use crate::models::Task;

/// A composable multi-key task ordering.
///
/// An empty chain considers every pair of tasks equal.
///
/// # Example
/// ```
/// use task_algos::ordering::{OrderingChain, rules};
///
/// let chain = OrderingChain::new()
///     .with_ordering(rules::ByPriority)
///     .then(rules::ById);
/// ```
#[derive(Clone, Default)]
pub struct OrderingChain {
    orderings: Vec<Arc<dyn TaskOrdering>>,
}

impl OrderingChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion order: deadline ascending, ties by priority ascending.
    pub fn completion_order() -> Self {
        Self::new()
            .with_ordering(rules::ByDeadline)
            .then(rules::ByPriority)
    }

    /// Priority ascending, ties by ID ascending.
    pub fn priority_then_id() -> Self {
        Self::new().with_ordering(rules::ByPriority).then(rules::ById)
    }

    /// Adds the primary ordering (or the next key if one is already set).
    pub fn with_ordering<O: TaskOrdering + 'static>(mut self, ordering: O) -> Self {
        self.orderings.push(Arc::new(ordering));
        self
    }

    /// Adds a tie-breaking ordering.
    pub fn then<O: TaskOrdering + 'static>(self, ordering: O) -> Self {
        self.with_ordering(ordering)
    }

    /// Number of keys in the chain.
    pub fn len(&self) -> usize {
        self.orderings.len()
    }

    /// Whether the chain has no keys.
    pub fn is_empty(&self) -> bool {
        self.orderings.is_empty()
    }

    /// Compares two tasks key by key.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.orderings
            .iter()
            .map(|o| o.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable in-place sort of a task slice.
    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns references to the tasks in chain order, leaving the slice untouched.
    pub fn sorted_refs<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let mut refs: Vec<&Task> = tasks.iter().collect();
        refs.sort_by(|a, b| self.compare(a, b));
        refs
    }
}

impl std::fmt::Debug for OrderingChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingChain")
            .field(
                "orderings",
                &self.orderings.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
