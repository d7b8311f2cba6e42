//! Shared task fixture for operation tests.
//!
//! Twenty tasks with deadlines spread from ten days before to seven days
//! after a reference time.

use chrono::{TimeDelta, TimeZone, Utc};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{Deadline, Task};

pub(crate) const PEOPLE: [&str; 5] = ["alice", "bob", "cindy", "daniel", "eve"];

/// Fixed reference time the fixture deadlines are relative to.
pub(crate) fn reference_time() -> Deadline {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub(crate) fn day() -> TimeDelta {
    TimeDelta::days(1)
}

pub(crate) fn hour() -> TimeDelta {
    TimeDelta::hours(1)
}

pub(crate) fn minute() -> TimeDelta {
    TimeDelta::minutes(1)
}

fn task(
    id: u64,
    name: &str,
    priority: i32,
    cost: f64,
    deadline: Deadline,
    assignees: &[&str],
) -> Task {
    Task::new(id)
        .with_name(name)
        .with_priority(priority)
        .with_cost(cost)
        .with_deadline(deadline)
        .with_assignees(assignees.iter().copied())
}

/// The fixture relative to `now`, in ID order.
pub(crate) fn tasks_at(now: Deadline) -> Vec<Task> {
    let [alice, bob, cindy, daniel, eve] = PEOPLE;
    vec![
        task(1001, "task a", 10, 80.0, now + day(), &[alice, cindy, daniel]),
        task(1002, "task b", 4, 70.0, now + day() * 7, &[bob, alice]),
        task(1003, "task c", 1, 15.0, now + day() * 3, &[alice, daniel]),
        task(1004, "task d", 5, 25.0, now + minute(), &[daniel, alice]),
        task(1005, "task e", 7, 30.0, now - day(), &[bob, bob, "frank"]),
        task(1006, "task f", 4, 70.0, now - day() * 3, &[bob, cindy]),
        task(1007, "task g", 3, 55.0, now + day() * 2, &[cindy, daniel, bob]),
        task(1008, "task h", 8, 50.0, now + hour() * 49, &[alice, daniel]),
        task(1009, "task i", 6, 5.0, now + hour() * 40, &[cindy, daniel]),
        task(1010, "task j", 4, 35.0, now + day() * 2, &[daniel, alice]),
        task(1011, "task k", 6, 30.0, now + hour() * 18, &[cindy, alice, "gia"]),
        task(1012, "task l", 7, 80.0, now + day() * 3, &[bob, alice]),
        task(1013, "task m", 2, 20.0, now + hour() * 10, &[alice, bob]),
        task(1014, "task n", 9, 35.0, now - minute() * 10, &[bob, bob]),
        task(1015, "task o", 4, 85.0, now + hour() * 36, &[alice, daniel, bob, "gia"]),
        task(1016, "task p", 3, 65.0, now + day() * 3, &[daniel, alice]),
        task(1017, "task q", 5, 95.0, now + day() * 5, &[daniel, daniel]),
        task(1018, "task r", 6, 10.0, now - day() * 10, &[alice, eve, bob]),
        task(1019, "task s", 7, 45.0, now + day() * 4, &[bob, alice]),
        task(1020, "task t", 3, 35.0, now + hour() * 23, &[cindy, alice]),
    ]
}

/// The fixture relative to [`reference_time`], shuffled with a seeded RNG.
pub(crate) fn tasks() -> Vec<Task> {
    let mut tasks = tasks_at(reference_time());
    tasks.shuffle(&mut SmallRng::seed_from_u64(2018));
    tasks
}

/// A task nobody is assigned to, due a day before the reference time.
pub(crate) fn empty_task() -> Task {
    task(1100, "task x", 1, 100.0, reference_time() - day(), &[])
}
