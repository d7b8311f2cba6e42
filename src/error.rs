//! Error types for task-collection operations.

use thiserror::Error;

use crate::models::TaskId;

/// Result alias for fallible task-collection operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Failure of a task-collection operation.
///
/// Operations that return an error leave the collection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task with id {id} not found")]
    NotFound { id: TaskId },

    #[error("'{person}' is already assigned to task {id}")]
    AlreadyAssigned { id: TaskId, person: String },

    #[error("position {n} is out of range for {len} tasks")]
    OutOfRange { n: usize, len: usize },

    #[error("task collection is empty")]
    EmptyCollection,

    #[error("no tasks with priority {0}")]
    NoTasksWithPriority(i32),

    #[error("cannot sample half of {len} tasks")]
    SampleTooSmall { len: usize },

    #[error("extending the deadline of task {id} overflows")]
    DeadlineOverflow { id: TaskId },
}
