//! Task domain model.
//!
//! A task is a unit of work with an identifier, a label, a priority, a cost,
//! a deadline, and a set of assignees. Collections of tasks are plain
//! `Vec<Task>` values owned by the caller.
//!
//! # Time Representation
//! Deadlines are absolute UTC time points (`chrono::DateTime<Utc>`);
//! extensions are signed `chrono::TimeDelta` values.

mod task;

pub use task::{Deadline, Task, TaskId};
