//! Fixed-width task table.
//!
//! Every body line wraps on its own into 44-character chunks. Only the first
//! row of a task carries its number and stamp; continuation rows leave those
//! columns blank.

use crossterm::style::{Color, Stylize};

use crate::task::{Stamp, Task};

/// Width of one body chunk.
pub const BODY_WIDTH: usize = 44;

pub const DIVIDER: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
pub const HEADER_TITLES: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";
const CONTINUATION: &str = "|    |            |       |   |   |";

pub const NO_TASKS: &str = "No tasks have been input";

/// Cut one body line into padded chunks.
///
/// Chunks are counted in chars. The last chunk is right-padded to
/// `BODY_WIDTH`; a line whose length is an exact multiple gets no extra chunk.
/// An empty line yields no chunks.
pub fn wrap_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(BODY_WIDTH)
        .map(|chunk| format!("{:<width$}", chunk.iter().collect::<String>(), width = BODY_WIDTH))
        .collect()
}

/// Number label of the first column.
pub fn index_label(number: usize) -> String {
    match number {
        0..=9 => format!("{number}  "),
        10..=99 => format!("{number} "),
        _ => number.to_string(),
    }
}

fn cell(color: Option<Color>) -> String {
    match color {
        Some(c) => " ".on(c).to_string(),
        None => " ".to_string(),
    }
}

fn first_row(label: &str, stamp: Stamp<'_>, chunk: &str) -> String {
    let date = stamp
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    format!(
        "| {label}| {date:<10} | {time:<5} | {p} | {u} |{chunk}|",
        time = stamp.time.unwrap_or_default(),
        p = cell(stamp.priority.map(|p| p.color())),
        u = cell(stamp.urgency.map(|u| u.color())),
    )
}

/// Rows of a single task, without the trailing divider.
pub fn task_rows(number: usize, task: &Task) -> Vec<String> {
    let mut chunks = task.text.iter().flat_map(|line| wrap_line(line));
    let first = chunks.next().unwrap_or_else(|| " ".repeat(BODY_WIDTH));
    let mut rows = vec![first_row(&index_label(number), task.stamp(), &first)];
    rows.extend(chunks.map(|chunk| format!("{CONTINUATION}{chunk}|")));
    rows
}

/// Full table as output lines, or the "no tasks" notice for an empty list.
pub fn render(tasks: &[Task]) -> Vec<String> {
    if tasks.is_empty() {
        return vec![NO_TASKS.to_string()];
    }
    let mut lines = vec![DIVIDER.to_string(), HEADER_TITLES.to_string(), DIVIDER.to_string()];
    for (i, task) in tasks.iter().enumerate() {
        lines.extend(task_rows(i + 1, task));
        lines.push(DIVIDER.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Priority, Urgency};
    use chrono::NaiveDate;

    fn task(lines: &[&str]) -> Task {
        Task {
            priority: Some(Priority::High),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            time: Some("10:00".into()),
            urgency: Some(Urgency::Upcoming),
            text: lines.iter().map(|s| s.to_string()).collect(),
            ..Task::new()
        }
    }

    #[test]
    fn test_wrap_exact_width_is_one_chunk() {
        let line = "a".repeat(44);
        let chunks = wrap_line(&line);
        assert_eq!(chunks, vec![line]);
    }

    #[test]
    fn test_wrap_one_over_width_pads_remainder() {
        let line = "b".repeat(45);
        let chunks = wrap_line(&line);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "b".repeat(44));
        assert_eq!(chunks[1], format!("b{}", " ".repeat(43)));
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let chunks = wrap_line("héllo");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chars().count(), BODY_WIDTH);
    }

    #[test]
    fn test_empty_line_adds_no_rows() {
        assert!(wrap_line("").is_empty());
        let rows = task_rows(3, &task(&["first", "", "last"]));
        assert_eq!(rows.len(), 2);
        assert!(rows[0].ends_with(&format!("|first{}|", " ".repeat(39))));
        assert_eq!(rows[1], format!("{CONTINUATION}last{}|", " ".repeat(40)));
    }

    #[test]
    fn test_index_label_spacing() {
        assert_eq!(index_label(1), "1  ");
        assert_eq!(index_label(9), "9  ");
        assert_eq!(index_label(10), "10 ");
        assert_eq!(index_label(99), "99 ");
        assert_eq!(index_label(100), "100");
        assert_eq!(index_label(1234), "1234");
    }

    #[test]
    fn test_lines_wrap_independently() {
        let long = "x".repeat(50);
        let rows = task_rows(1, &task(&[long.as_str(), "short"]));
        assert_eq!(rows.len(), 3);
        assert!(rows[0].ends_with(&format!("|{}|", "x".repeat(44))));
        assert_eq!(rows[1], format!("{CONTINUATION}{}{}|", "x".repeat(6), " ".repeat(38)));
        assert_eq!(rows[2], format!("{CONTINUATION}short{}|", " ".repeat(39)));
    }

    #[test]
    fn test_first_row_layout() {
        let rows = task_rows(1, &task(&["Buy milk"]));
        assert_eq!(rows.len(), 1);
        let expected = format!(
            "| 1  | 2024-01-01 | 10:00 | {} | {} |Buy milk{}|",
            " ".on(Color::Yellow),
            " ".on(Color::Green),
            " ".repeat(36)
        );
        assert_eq!(rows[0], expected);
    }

    #[test]
    fn test_unset_stamp_renders_blank_cells() {
        let t = Task { text: vec!["x".into()], ..Task::new() };
        let rows = task_rows(12, &t);
        assert_eq!(rows[0], format!("| 12 |            |       |   |   |x{}|", " ".repeat(43)));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render(&[]), vec![NO_TASKS.to_string()]);
    }

    #[test]
    fn test_render_frames_every_task() {
        let lines = render(&[task(&["one"]), task(&["two"])]);
        assert_eq!(lines.len(), 3 + 2 * 2);
        assert_eq!(lines[0], DIVIDER);
        assert_eq!(lines[1], HEADER_TITLES);
        assert_eq!(lines[4], DIVIDER);
        assert!(lines[5].starts_with("| 2  |"));
        assert_eq!(lines[6], DIVIDER);
    }
}
