//! Task data structure and related functionality.
//!
//! This module defines the `Task` record kept in the list, the derived-field
//! recomputation that runs whenever the due instant changes, and the `Stamp`
//! view the table renderer reads.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deadline::{days_until, time_of_day, urgency_of};
use crate::fields::*;

/// A single to-do item.
///
/// `time` and `urgency` are derived from `date_time` at the moment it is set.
/// They are persisted alongside the record and are not recomputed on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub priority: Option<Priority>,
    pub date: Option<NaiveDate>,
    #[serde(default, with = "due_format")]
    pub date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, rename = "terms", skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

/// The non-text metadata of a task, as shown in the first table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp<'a> {
    pub date: Option<NaiveDate>,
    pub time: Option<&'a str>,
    pub priority: Option<Priority>,
    pub urgency: Option<Urgency>,
}

impl Task {
    /// Create an empty task with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear) the due instant and recompute the derived fields against `now`.
    pub fn set_due(&mut self, due: Option<NaiveDateTime>, now: DateTime<Utc>) {
        self.date_time = due;
        self.time = due.map(time_of_day);
        self.urgency = urgency_of(days_until(due, now));
    }

    /// Borrow the metadata used by the renderer.
    pub fn stamp(&self) -> Stamp<'_> {
        Stamp {
            date: self.date,
            time: self.time.as_deref(),
            priority: self.priority,
            urgency: self.urgency,
        }
    }
}

/// `yyyy-mm-ddThh:mm` on disk, with `:ss` only when the seconds are not zero.
mod due_format {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M";
    const WRITE_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const READ_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => {
                let fmt = if dt.second() == 0 && dt.nanosecond() == 0 {
                    WRITE_FORMAT
                } else {
                    WRITE_FORMAT_SECONDS
                };
                serializer.serialize_str(&dt.format(fmt).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        READ_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid dateTime '{raw}'")))
    }
}
