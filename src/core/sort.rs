//! # Display Order
//!
//! The list is always stored in insertion order. What the user sees can
//! differ: in sort-by-urgency mode the tasks are projected into a new order,
//! and each [`DisplayEntry`] remembers where its task really lives so that a
//! cursor position on screen can be turned back into a storage index.
//!
//! Sort key, highest band first:
//!
//! ```text
//! band 2: has a parseable deadline, not done   (soonest first)
//! band 1: no deadline or an unparsable one     (insertion order)
//! band 0: has a parseable deadline, done       (soonest first)
//! ```
//!
//! Projections are rebuilt from scratch whenever they are needed and are
//! never edited in place.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::core::deadline;
use crate::core::task::Task;
use crate::core::urgency::days_until;

/// A task as placed on screen, plus its index in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    pub task: &'a Task,
    pub index: usize,
}

struct SortKey {
    band: u8,
    /// Whole days until the deadline; `None` stands for +infinity.
    days: Option<i64>,
}

impl SortKey {
    fn of(task: &Task, now: NaiveDateTime) -> Self {
        match deadline::parse(task.deadline_str(), now) {
            Some(due) => SortKey {
                band: if task.done { 0 } else { 2 },
                days: Some(days_until(due, now)),
            },
            None => SortKey { band: 1, days: None },
        }
    }

    fn cmp_urgency(&self, other: &Self) -> Ordering {
        other.band.cmp(&self.band).then_with(|| match (self.days, other.days) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

/// Storage order, unchanged.
pub fn storage_order(tasks: &[Task]) -> Vec<DisplayEntry<'_>> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| DisplayEntry { task, index })
        .collect()
}

/// Urgency order. Stable: equal keys keep their insertion order.
pub fn project(tasks: &[Task], now: NaiveDateTime) -> Vec<DisplayEntry<'_>> {
    let mut keyed: Vec<(SortKey, DisplayEntry<'_>)> = storage_order(tasks)
        .into_iter()
        .map(|entry| (SortKey::of(entry.task, now), entry))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp_urgency(b));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// The order the list is drawn in for the given sort mode.
pub fn display_order(tasks: &[Task], sort_by_urgency: bool, now: NaiveDateTime) -> Vec<DisplayEntry<'_>> {
    if sort_by_urgency {
        project(tasks, now)
    } else {
        storage_order(tasks)
    }
}
