//! Named total orders over tasks and a composable ordering chain.
//!
//! Orders are strategy values selected per call rather than a fixed
//! `Ord` on `Task`. A chain applies its orders in sequence, consulting the
//! next one only on ties.
//!
//! # Usage
//!
//! ```
//! use task_algos::ordering::{OrderingChain, rules};
//!
//! // Deadline ascending, ties broken by priority ascending.
//! let chain = OrderingChain::new()
//!     .with_ordering(rules::ByDeadline)
//!     .then(rules::ByPriority);
//! assert_eq!(chain.len(), 2);
//! ```

mod chain;
pub mod rules;

pub use chain::OrderingChain;

use crate::models::Task;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A total order over tasks.
///
/// Implementations compare a single key in ascending order.
pub trait TaskOrdering: Send + Sync + Debug {
    /// Ordering name (e.g., "NAME", "DEADLINE").
    fn name(&self) -> &'static str;

    /// Compares two tasks by this ordering's key.
    fn compare(&self, a: &Task, b: &Task) -> Ordering;

    /// Ordering description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
