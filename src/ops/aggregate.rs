//! Cost aggregation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total cost | Sum of all task costs |
//! | Total cost of a person | Sum of costs of tasks the person is assigned to |
//! | Average cost of a priority | Mean cost of tasks with that priority |
//! | Cost burndown | Cumulative cost per distinct deadline, earliest first |

use crate::error::{Result, TaskError};
use crate::models::Task;
use crate::ordering::{rules, OrderingChain};

/// Writes the cumulative cost burndown of `tasks` into `out`.
///
/// Tasks are ordered by deadline. Tasks sharing a deadline contribute a
/// single point, so `out` receives one running total per distinct deadline.
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use task_algos::models::Task;
/// use task_algos::ops::cost_burndown;
///
/// let now = Utc::now();
/// let tasks: Vec<Task> = [(4, 43.0), (2, 11.0), (3, 7.0), (1, 23.0), (3, 19.0)]
///     .into_iter()
///     .enumerate()
///     .map(|(i, (d, cost))| {
///         Task::new(i as u64)
///             .with_cost(cost)
///             .with_deadline(now + TimeDelta::days(d))
///     })
///     .collect();
///
/// let mut burndown: Vec<f64> = Vec::new();
/// cost_burndown(&tasks, &mut burndown);
/// assert_eq!(burndown, vec![23.0, 34.0, 60.0, 103.0]);
/// ```
pub fn cost_burndown<E>(tasks: &[Task], out: &mut E)
where
    E: Extend<f64>,
{
    let sorted = OrderingChain::new()
        .with_ordering(rules::ByDeadline)
        .sorted_refs(tasks);

    let mut running = 0.0;
    let mut iter = sorted.into_iter().peekable();
    while let Some(task) = iter.next() {
        running += task.cost;
        let group_ends = iter
            .peek()
            .map_or(true, |next| next.deadline != task.deadline);
        if group_ends {
            out.extend(Some(running));
        }
    }
}

/// Sum of all task costs. Zero for an empty slice.
pub fn total_cost(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.cost).sum()
}

/// Sum of the costs of tasks `assignee` is assigned to.
///
/// Each task counts once, however many people share it.
pub fn total_cost_of(tasks: &[Task], assignee: &str) -> f64 {
    tasks
        .iter()
        .filter(|t| t.is_assigned_to(assignee))
        .map(|t| t.cost)
        .sum()
}

/// Mean cost of the tasks with the given priority.
///
/// # Errors
/// [`TaskError::NoTasksWithPriority`] if no task has `priority`.
pub fn average_cost_of_prio(tasks: &[Task], priority: i32) -> Result<f64> {
    let (sum, count) = tasks
        .iter()
        .filter(|t| t.priority == priority)
        .fold((0.0, 0usize), |(sum, count), t| (sum + t.cost, count + 1));

    if count == 0 {
        return Err(TaskError::NoTasksWithPriority(priority));
    }
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_cost_burndown() {
        let tasks = fixtures::tasks();
        let mut costs: Vec<f64> = Vec::new();
        cost_burndown(&tasks, &mut costs);

        let proper = [
            10.0, 80.0, 110.0, 145.0, 170.0, 190.0, 220.0, 255.0, 335.0, 420.0, 425.0, 515.0,
            565.0, 725.0, 770.0, 865.0, 935.0,
        ];
        assert_eq!(costs.len(), proper.len());
        for (actual, expected) in costs.iter().zip(proper) {
            assert!((actual - expected).abs() < 1e-10, "{actual} != {expected}");
        }
    }

    #[test]
    fn test_cost_burndown_empty() {
        let mut costs = vec![1.0];
        cost_burndown(&[], &mut costs);
        assert_eq!(costs, vec![1.0]);
    }

    #[test]
    fn test_cost_burndown_single_deadline() {
        let now = fixtures::reference_time();
        let tasks = vec![
            Task::new(1).with_cost(5.0).with_deadline(now),
            Task::new(2).with_cost(6.0).with_deadline(now),
        ];
        let mut costs: Vec<f64> = Vec::new();
        cost_burndown(&tasks, &mut costs);
        assert_eq!(costs, vec![11.0]);
    }

    #[test]
    fn test_total_cost() {
        let mut tasks = fixtures::tasks();
        assert!((total_cost(&tasks) - 935.0).abs() < 1e-10);

        let amount = 40.0;
        for task in &mut tasks {
            task.cost -= amount / 20.0;
        }
        assert!((total_cost(&tasks) - 895.0).abs() < 1e-9);
        assert_eq!(total_cost(&[]), 0.0);
    }

    #[test]
    fn test_total_cost_of() {
        let tasks = fixtures::tasks();
        let expected: f64 = tasks
            .iter()
            .filter(|t| t.assignees.contains("gia"))
            .map(|t| t.cost)
            .sum();
        assert!((expected - 115.0).abs() < 1e-10);
        assert!((total_cost_of(&tasks, "gia") - expected).abs() < 1e-10);
        assert_eq!(total_cost_of(&tasks, "nobody"), 0.0);
    }

    #[test]
    fn test_total_cost_of_overlapping_assignees() {
        let tasks = vec![
            Task::new(1).with_cost(10.0).with_assignees(["alice", "bob"]),
            Task::new(2).with_cost(20.0).with_assignee("alice"),
            Task::new(3).with_cost(40.0).with_assignee("bob"),
        ];
        assert_eq!(total_cost_of(&tasks, "alice"), 30.0);
        assert_eq!(total_cost_of(&tasks, "bob"), 50.0);
        // the shared task is counted for both people
        assert_eq!(
            total_cost_of(&tasks, "alice") + total_cost_of(&tasks, "bob"),
            total_cost(&tasks) + 10.0
        );
    }

    #[test]
    fn test_average_cost_of_prio() {
        let tasks = fixtures::tasks();
        for prio in 1..=10 {
            let matching: Vec<f64> = tasks
                .iter()
                .filter(|t| t.priority == prio)
                .map(|t| t.cost)
                .collect();
            let expected = matching.iter().sum::<f64>() / matching.len() as f64;
            let actual = average_cost_of_prio(&tasks, prio).unwrap();
            assert!((actual - expected).abs() < 1e-10, "priority {prio}");
        }
        // 1002, 1006, 1010, 1015
        assert!((average_cost_of_prio(&tasks, 4).unwrap() - 65.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_cost_of_prio_no_match() {
        let tasks = fixtures::tasks();
        assert_eq!(
            average_cost_of_prio(&tasks, 11),
            Err(TaskError::NoTasksWithPriority(11))
        );
        assert!(average_cost_of_prio(&[], 1).is_err());
    }
}
