//! # Urgency Tiers
//!
//! Buckets a deadline by how many whole days remain, purely to pick a color.
//! Tiers are derived on every call and never stored, so a task drifts from
//! `Distant` to `Overdue` on its own as real time passes.
//!
//! ```text
//! days < 0   → Overdue
//! days == 0  → Today
//! days 1..=2 → Urgent
//! days 3..=7 → Soon
//! days > 7   → Distant
//! unparsable → None
//! ```

use chrono::NaiveDateTime;

use crate::core::deadline;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// No deadline, or one that does not parse.
    None,
    Overdue,
    Today,
    Urgent,
    Soon,
    Distant,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::None => "untimed",
            Tier::Overdue => "overdue",
            Tier::Today => "today",
            Tier::Urgent => "urgent",
            Tier::Soon => "soon",
            Tier::Distant => "distant",
        }
    }

    fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Tier::Overdue,
            0 => Tier::Today,
            1..=2 => Tier::Urgent,
            3..=7 => Tier::Soon,
            _ => Tier::Distant,
        }
    }
}

/// Whole days from `now` until `deadline`, rounded toward negative infinity.
///
/// Anything already in the past is at least one day overdue, and a deadline
/// 36 hours out counts as one day.
pub fn days_until(deadline: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let delta = deadline - now;
    // num_seconds truncates toward zero; a negative sub-second remainder
    // means the true value lies one second lower
    let seconds = delta.num_seconds() - i64::from(delta.subsec_nanos() < 0);
    seconds.div_euclid(SECONDS_PER_DAY)
}

/// Classify a raw deadline string at `now`.
pub fn classify(deadline_str: &str, now: NaiveDateTime) -> Tier {
    match deadline::parse(deadline_str, now) {
        Some(deadline) => Tier::from_days(days_until(deadline, now)),
        None => Tier::None,
    }
}
