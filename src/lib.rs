//! Sequence algorithms over task collections.
//!
//! Provides a task model and a flat set of independent operations over
//! slices of tasks: filtering, in-place mutation, partitioning, ordered
//! selection, cumulative aggregation, and sampling-based estimation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskId`, `Deadline`
//! - **`ordering`**: Named total orders over tasks and a composable `OrderingChain`
//! - **`ops`**: Collection operations over `&[Task]`, `&mut [Task]`, or `&mut Vec<Task>`
//! - **`validation`**: Input integrity checks (duplicate IDs, invalid costs)
//! - **`error`**: `TaskError` and the crate `Result` alias
//!
//! # Collections
//!
//! A slice is the position range `[begin, end)`. Operations that only read or
//! reorder take a slice; operations that structurally remove tasks take the
//! owning `Vec`. Output sinks accept any `Extend` implementor.
//!
//! ```
//! use chrono::{TimeDelta, Utc};
//! use task_algos::models::Task;
//! use task_algos::ops;
//!
//! let now = Utc::now();
//! let tasks = vec![
//!     Task::new(1).with_cost(40.0).with_deadline(now + TimeDelta::days(2)),
//!     Task::new(2).with_cost(10.0).with_deadline(now + TimeDelta::days(1)),
//! ];
//!
//! let mut burndown: Vec<f64> = Vec::new();
//! ops::cost_burndown(&tasks, &mut burndown);
//! assert_eq!(burndown, vec![10.0, 50.0]);
//! ```

pub mod error;
pub mod models;
pub mod ops;
pub mod ordering;
pub mod validation;

pub use error::{Result, TaskError};
