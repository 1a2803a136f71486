//! Field validation and the interactive field editors.
//!
//! Each editor prompts once, overwrites its field and reports whether the new
//! value is valid. Rejected input leaves the field unset; retrying is up to the
//! caller. The `add` flow retries until the field is accepted, the `edit` flow
//! does not.

use std::io::{BufRead, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::console::Console;
use crate::error::{FieldError, Result};
use crate::fields::parse_priority;
use crate::task::Task;

pub const PRIORITY_PROMPT: &str = "Input the task priority (C, H, N, L):";
pub const DATE_PROMPT: &str = "Input the date (yyyy-mm-dd):";
pub const TIME_PROMPT: &str = "Input the time (hh:mm):";
pub const TEXT_PROMPT: &str = "Input a new task (enter a blank line to end):";

/// Result of running one field editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Accepted,
    Rejected(FieldError),
}

impl FieldOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FieldOutcome::Accepted)
    }
}

impl<T> From<std::result::Result<T, FieldError>> for FieldOutcome {
    fn from(r: std::result::Result<T, FieldError>) -> Self {
        match r {
            Ok(_) => FieldOutcome::Accepted,
            Err(e) => FieldOutcome::Rejected(e),
        }
    }
}

/// Parse `yyyy-mm-dd` into a real calendar date.
///
/// Parts after the third `-` are ignored and single-digit month/day are fine.
pub fn parse_date(input: &str) -> std::result::Result<NaiveDate, FieldError> {
    let mut parts = input.trim().split('-');
    let mut next = || parts.next().ok_or(FieldError::Date);
    let year: i32 = next()?.parse().map_err(|_| FieldError::Date)?;
    let month: u32 = next()?.parse().map_err(|_| FieldError::Date)?;
    let day: u32 = next()?.parse().map_err(|_| FieldError::Date)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::Date)
}

/// Combine `hh:mm` with an already valid date.
pub fn parse_due(input: &str, date: Option<NaiveDate>) -> std::result::Result<NaiveDateTime, FieldError> {
    let date = date.ok_or(FieldError::MissingDate)?;
    let mut parts = input.trim().split(':');
    let mut next = || parts.next().ok_or(FieldError::Time);
    let hour: u32 = next()?.parse().map_err(|_| FieldError::Time)?;
    let minute: u32 = next()?.parse().map_err(|_| FieldError::Time)?;
    date.and_hms_opt(hour, minute, 0).ok_or(FieldError::Time)
}

/// Prompt for a priority letter.
pub fn set_priority<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    task: &mut Task,
) -> Result<FieldOutcome> {
    let input = console.ask(PRIORITY_PROMPT)?;
    task.priority = parse_priority(&input);
    Ok(task.priority.ok_or(FieldError::Priority).into())
}

/// Prompt for the due date.
pub fn set_date<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    task: &mut Task,
) -> Result<FieldOutcome> {
    let input = console.ask(DATE_PROMPT)?;
    let parsed = parse_date(&input);
    task.date = parsed.as_ref().ok().copied();
    Ok(parsed.into())
}

/// Prompt for the due time; needs `task.date` to be set.
///
/// Time of day and urgency are recomputed against `now` whatever the outcome.
pub fn set_date_time<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    task: &mut Task,
    now: DateTime<Utc>,
) -> Result<FieldOutcome> {
    let input = console.ask(TIME_PROMPT)?;
    let parsed = parse_due(&input, task.date);
    if let Err(e) = &parsed {
        debug!(input = %input, error = %e, "rejected due time");
    }
    task.set_due(parsed.as_ref().ok().copied(), now);
    Ok(parsed.into())
}

/// Read body lines until a blank one.
///
/// A blank first line leaves the current body untouched.
pub fn set_task_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    task: &mut Task,
) -> Result<FieldOutcome> {
    console.say(TEXT_PROMPT)?;
    let mut body = Vec::new();
    loop {
        let line = console.read_line()?;
        let line = line.trim();
        if !line.is_empty() {
            body.push(line.to_string());
            continue;
        }
        if body.is_empty() {
            console.say(&FieldError::BlankText.to_string())?;
            return Ok(FieldOutcome::Rejected(FieldError::BlankText));
        }
        task.text = body;
        return Ok(FieldOutcome::Accepted);
    }
}
