//! Task-collection operations.
//!
//! A flat set of independent, stateless operations over a slice of tasks
//! (the position range `[begin, end)`), or over the owning `Vec` where tasks
//! must be structurally removed.
//!
//! # Categories
//!
//! | Module | Operations |
//! |--------|-----------|
//! | query | assignment/deadline predicates, counting, filtering by priority |
//! | mutate | in-place assignee and deadline edits, removal of finished tasks |
//! | partition | extraction and stable separation by deadline |
//! | select | sorted listings, n-th/first-n in completion order, cost extremes |
//! | aggregate | totals, averages, cost burndown |
//! | sampling | randomized workload estimation |
//!
//! Fallible operations return [`crate::Result`] and leave the collection
//! untouched on failure.

mod aggregate;
mod mutate;
mod partition;
mod query;
mod sampling;
mod select;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregate::{average_cost_of_prio, cost_burndown, total_cost, total_cost_of};
pub use mutate::{
    add_assignee_to_task, extend_deadlines, remove_all_finished, remove_all_finished_at,
    remove_assignee_from_all,
};
pub use partition::{extract_tasks_with_deadline_before, separate_by_deadline};
pub use query::{
    count_tasks_with_deadlines_before, get_tasks_with_priority, has_all_tasks_assigned,
    has_task_with_deadline_after,
};
pub use sampling::{estimate_workload, estimate_workload_with_rng};
pub use select::{
    cheapest_and_most_expensive, get_first_n_to_complete, get_nth_to_complete,
    list_sorted_by_prio, IdPriority,
};
