//! Storage of the task list.
//!
//! The whole list is one JSON array in a single file. It is read once at
//! startup and written back in full when the session ends.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::DbError;
use crate::task::Task;

/// Storage file name, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "taskList.json";

/// In-memory task list. Task numbers are 1-based positions.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load the list from `path`. A missing file or a `null` document is an empty list.
    pub fn load(path: &Path) -> Result<Self, DbError> {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no task file yet, starting empty");
                return Ok(Database::default());
            }
            Err(source) => {
                return Err(DbError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        let tasks: Option<Vec<Task>> = serde_json::from_str(&buf).map_err(|source| DbError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        let db = Database {
            tasks: tasks.unwrap_or_default(),
        };
        info!(path = %path.display(), count = db.tasks.len(), "loaded tasks");
        Ok(db)
    }

    /// Save the list to `path` using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<(), DbError> {
        let data = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        let write_err = |source| DbError::Write {
            path: path.display().to_string(),
            source,
        };
        let mut f = File::create(&tmp).map_err(write_err)?;
        f.write_all(data.as_bytes()).map_err(write_err)?;
        f.flush().map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;
        info!(path = %path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Resolve a typed task number into a list position.
    ///
    /// The input is not trimmed; anything that is not a number in `1..=len` is `None`.
    pub fn resolve_number(&self, input: &str) -> Option<usize> {
        let number: usize = input.parse().ok()?;
        (1..=self.len()).contains(&number).then(|| number - 1)
    }

    /// Remove the task with the given 1-based number, shifting later tasks down.
    pub fn remove(&mut self, number: usize) -> Option<Task> {
        let idx = number.checked_sub(1)?;
        (idx < self.tasks.len()).then(|| self.tasks.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Priority, Urgency};
    use chrono::NaiveDate;

    fn task(text: &str) -> Task {
        Task {
            text: vec![text.to_string()],
            ..Task::new()
        }
    }

    fn full_task() -> Task {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Task {
            priority: Some(Priority::Critical),
            date: Some(date),
            date_time: date.and_hms_opt(10, 0, 0),
            text: vec!["Buy milk".into(), "and bread".into()],
            time: Some("10:00".into()),
            urgency: Some(Urgency::Overdue),
        }
    }

    #[test]
    fn test_missing_file_is_empty_list() {
        let dir = tempfile::TempDir::new().unwrap();
        let db = Database::load(&dir.path().join(DEFAULT_DB_FILE)).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_tasks_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        let db = Database {
            tasks: vec![full_task(), task("second"), Task { priority: Some(Priority::Low), ..task("third") }],
        };
        db.save(&path).unwrap();
        let loaded = Database::load(&path).unwrap();
        assert_eq!(loaded, db);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_is_a_plain_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        Database { tasks: vec![task("a")] }.save(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["text"][0], "a");
    }

    #[test]
    fn test_loads_legacy_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        let legacy = r#"[{"priority":"\u001b[103m \u001b[0m","date":"2024-01-01","dateTime":"2024-01-01T10:00","text":["Buy milk"],"time":"10:00","terms":"\u001b[101m \u001b[0m"}]"#;
        fs::write(&path, legacy).unwrap();
        let db = Database::load(&path).unwrap();
        let t = &db.tasks[0];
        assert_eq!(t.priority, Some(Priority::High));
        assert_eq!(t.urgency, Some(Urgency::Overdue));
        assert_eq!(t.time.as_deref(), Some("10:00"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Database::load(&path), Err(DbError::Parse { .. })));
    }

    #[test]
    fn test_null_file_is_empty_list() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        fs::write(&path, "null\n").unwrap();
        let db = Database::load(&path).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_parse_error_message_names_the_file_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DB_FILE);
        fs::write(&path, "[1, 2]").unwrap();
        let err = Database::load(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.ends_with("is not a valid task list"), "{message}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_resolve_number() {
        let db = Database { tasks: vec![task("a"), task("b")] };
        assert_eq!(db.resolve_number("1"), Some(0));
        assert_eq!(db.resolve_number("2"), Some(1));
        assert_eq!(db.resolve_number("0"), None);
        assert_eq!(db.resolve_number("3"), None);
        assert_eq!(db.resolve_number("-1"), None);
        assert_eq!(db.resolve_number(" 1"), None);
        assert_eq!(db.resolve_number("one"), None);
    }

    #[test]
    fn test_remove_shifts_later_tasks_down() {
        let mut db = Database { tasks: vec![task("a"), task("b"), task("c"), task("d")] };
        let removed = db.remove(2).unwrap();
        assert_eq!(removed.text, vec!["b"]);
        let texts: Vec<_> = db.tasks.iter().map(|t| t.text[0].as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
        assert!(db.remove(4).is_none());
        assert!(db.remove(0).is_none());
    }
}
