//! # Deadline Parsing
//!
//! Turns the free-form deadline a user typed into an absolute point in time.
//! Three grammars are tried in order, first match wins:
//!
//! 1. `YYYY-MM-DD`: a full calendar date, at midnight.
//! 2. `MM-DD`: month and day in the year of `now`, at midnight. The same
//!    string therefore means a different day once the year rolls over.
//! 3. `in N days` (or `in N day`): `now` plus N whole days, keeping the
//!    time of day.
//!
//! Anything else is simply not a deadline. There is no error type: an
//! unparsable string is an untimed task as far as the rest of the app cares.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

/// Parse `input` relative to `now`. Returns `None` for empty or unrecognized text.
pub fn parse(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    parse_full_date(input)
        .or_else(|| parse_month_day(input, now.year()))
        .or_else(|| parse_relative_days(input, now))
}

/// Whether `input` would parse at all.
pub fn is_valid(input: &str, now: NaiveDateTime) -> bool {
    parse(input, now).is_some()
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_full_date(input: &str) -> Option<NaiveDateTime> {
    if !is_date_text(input, 2) {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)
}

fn parse_month_day(input: &str, year: i32) -> Option<NaiveDateTime> {
    if !is_date_text(input, 1) {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{year:04}-{input}"), DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)
}

fn parse_relative_days(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let rest = input.strip_prefix("in ")?;
    let mut words = rest.split_whitespace();
    let count = words.next().and_then(parse_digits)?;
    let unit = words.next()?;
    if !matches!(unit, "day" | "days") || words.next().is_some() {
        return None;
    }
    let delta = TimeDelta::try_days(i64::from(count))?;
    now.checked_add_signed(delta)
}

/// Digits and exactly `dashes` dashes. Month and day fields are one or two
/// digits; a leading year field is exactly four.
///
/// chrono skips whitespace before numbers and accepts signed years, so the
/// shape is checked before handing the text over.
fn is_date_text(input: &str, dashes: usize) -> bool {
    let fields: Vec<&str> = input.split('-').collect();
    fields.len() == dashes + 1
        && fields.iter().enumerate().all(|(i, field)| {
            let width_ok = if i == 0 && dashes == 2 {
                field.len() == 4
            } else {
                (1..=2).contains(&field.len())
            };
            width_ok && field.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Unsigned decimal, ASCII digits only (no sign, no whitespace).
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
