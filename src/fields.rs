//! Enumerations and field types for the task list.
//!
//! This module defines the small closed sets the tool works with: task
//! priorities, urgency buckets, the fields that can be edited and the
//! top-level actions accepted by the command loop.

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
///
/// Stored as its single-letter code. The coloured glyphs written by older
/// versions of the tool are still accepted on load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "C", alias = "\u{1b}[101m \u{1b}[0m")]
    Critical,
    #[serde(rename = "H", alias = "\u{1b}[103m \u{1b}[0m")]
    High,
    #[serde(rename = "N", alias = "\u{1b}[102m \u{1b}[0m")]
    Normal,
    #[serde(rename = "L", alias = "\u{1b}[104m \u{1b}[0m")]
    Low,
}

impl Priority {
    /// Background colour of the priority cell.
    pub fn color(self) -> Color {
        match self {
            Priority::Critical => Color::Red,
            Priority::High => Color::Yellow,
            Priority::Normal => Color::Green,
            Priority::Low => Color::Blue,
        }
    }
}

/// Deadline bucket derived from the whole-day distance to the due instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    #[serde(rename = "overdue", alias = "\u{1b}[101m \u{1b}[0m")]
    Overdue,
    #[serde(rename = "today", alias = "\u{1b}[103m \u{1b}[0m")]
    DueToday,
    #[serde(rename = "upcoming", alias = "\u{1b}[102m \u{1b}[0m")]
    Upcoming,
}

impl Urgency {
    /// Background colour of the urgency cell.
    pub fn color(self) -> Color {
        match self {
            Urgency::Overdue => Color::Red,
            Urgency::DueToday => Color::Yellow,
            Urgency::Upcoming => Color::Green,
        }
    }
}

/// Fields that the `edit` action can overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Priority,
    Date,
    Time,
    Task,
}

/// Top-level actions of the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

/// Parse a priority letter. Input is upper-cased but not trimmed.
pub fn parse_priority(s: &str) -> Option<Priority> {
    match s.to_uppercase().as_str() {
        "C" => Some(Priority::Critical),
        "H" => Some(Priority::High),
        "N" => Some(Priority::Normal),
        "L" => Some(Priority::Low),
        _ => None,
    }
}

/// Parse an edit field name (already trimmed by the caller).
pub fn parse_edit_field(s: &str) -> Option<EditField> {
    match s {
        "priority" => Some(EditField::Priority),
        "date" => Some(EditField::Date),
        "time" => Some(EditField::Time),
        "task" => Some(EditField::Task),
        _ => None,
    }
}

/// Parse a top-level action (already trimmed by the caller).
pub fn parse_action(s: &str) -> Option<Action> {
    match s {
        "add" => Some(Action::Add),
        "print" => Some(Action::Print),
        "edit" => Some(Action::Edit),
        "delete" => Some(Action::Delete),
        "end" => Some(Action::End),
        _ => None,
    }
}
