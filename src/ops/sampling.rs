//! Sampling-based workload estimation.
//!
//! # Estimator
//!
//! Half of the tasks (`n_s = floor(len / 2)`) are drawn uniformly without
//! replacement. If `count` of them list the person as an assignee, the
//! estimated workload is `count / n_s`.
//!
//! With `k` of `len` tasks assigned to the person, the estimate always lies in
//! `[max(0, k - (len - n_s)) / n_s, min(k, n_s) / n_s]`, and its expectation is
//! the true fraction `k / len`.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::error::{Result, TaskError};
use crate::models::Task;

/// Estimates the share of tasks `person` is assigned to, using the
/// thread-local RNG.
///
/// # Errors
/// [`TaskError::SampleTooSmall`] if fewer than two tasks are given.
pub fn estimate_workload(tasks: &[Task], person: &str) -> Result<f64> {
    estimate_workload_with_rng(tasks, person, &mut rand::rng())
}

/// Estimates the share of tasks `person` is assigned to, sampling with `rng`.
///
/// # Errors
/// [`TaskError::SampleTooSmall`] if fewer than two tasks are given.
pub fn estimate_workload_with_rng<R: Rng + ?Sized>(
    tasks: &[Task],
    person: &str,
    rng: &mut R,
) -> Result<f64> {
    let sample_size = tasks.len() / 2;
    if sample_size == 0 {
        return Err(TaskError::SampleTooSmall { len: tasks.len() });
    }

    let hits = tasks
        .choose_multiple(rng, sample_size)
        .filter(|t| t.is_assigned_to(person))
        .count();

    trace!(person, sample_size, hits, "sampled workload");
    Ok(hits as f64 / sample_size as f64)
}
