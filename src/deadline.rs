//! Deadline arithmetic.
//!
//! Due instants are stored without a zone and always read as UTC, so the
//! day count does not depend on the machine's local zone.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::fields::Urgency;

/// Whole days from `now` until `due`, truncated toward zero.
pub fn days_until(due: Option<NaiveDateTime>, now: DateTime<Utc>) -> Option<i64> {
    let due = due?.and_utc();
    Some((due - now).num_days())
}

/// Map a day count to its urgency bucket.
pub fn urgency_of(days: Option<i64>) -> Option<Urgency> {
    match days? {
        0 => Some(Urgency::DueToday),
        d if d > 0 => Some(Urgency::Upcoming),
        _ => Some(Urgency::Overdue),
    }
}

/// Extract the `hh:mm` part of a due instant.
pub fn time_of_day(due: NaiveDateTime) -> String {
    due.format("%H:%M").to_string()
}
