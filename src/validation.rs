//! Input validation for task collections.
//!
//! The task type does not enforce collection-level invariants. Callers can
//! check a collection before running operations on it. Detects:
//! - Duplicate task IDs
//! - Negative costs
//! - Non-finite costs (NaN or infinite)

use crate::models::Task;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has a cost below zero.
    NegativeCost,
    /// A task's cost is NaN or infinite.
    NonFiniteCost,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task collection.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. Every cost is finite
/// 3. Every cost is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for task in tasks {
        if !ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if !task.cost.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteCost,
                format!("Task {} has a non-finite cost: {}", task.id, task.cost),
            ));
        } else if task.cost < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCost,
                format!("Task {} has a negative cost: {}", task.id, task.cost),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
