//! Command implementations for the interactive session.
//!
//! The command loop reads one action at a time and hands the shared
//! `Session` to the matching handler. Every handler talks to the user only
//! through the `Console` it is given.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::console::Console;
use crate::db::Database;
use crate::editors::*;
use crate::error::{DbError, Result, SessionError};
use crate::fields::*;
use crate::table::{self, NO_TASKS};
use crate::task::Task;

pub const ACTION_PROMPT: &str = "Input an action (add, print, edit, delete, end):";
pub const INVALID_ACTION: &str = "The input action is invalid";
pub const INVALID_NUMBER: &str = "Invalid task number";
pub const FIELD_PROMPT: &str = "Input a field to edit (priority, date, time, task):";
pub const INVALID_FIELD: &str = "Invalid field";
pub const TASK_CHANGED: &str = "The task is changed";
pub const TASK_DELETED: &str = "The task is deleted";
pub const EXITING: &str = "Tasklist exiting!";

/// State threaded through every command: the list, where it lives, and the clock.
pub struct Session {
    pub db: Database,
    pub db_path: PathBuf,
    clock: fn() -> DateTime<Utc>,
}

impl Session {
    /// Load the list stored at `db_path`.
    pub fn open(db_path: &Path) -> std::result::Result<Self, DbError> {
        Ok(Self {
            db: Database::load(db_path)?,
            db_path: db_path.to_path_buf(),
            clock: Utc::now,
        })
    }

    /// Replace the clock used for urgency computation.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

/// Run the command loop until `end` or end of input. The list is saved on the way out.
pub fn run<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    loop {
        let outcome = match console.ask(ACTION_PROMPT) {
            Ok(input) => match parse_action(input.trim()) {
                Some(Action::Add) => cmd_add(session, console),
                Some(Action::Print) => cmd_print(session, console),
                Some(Action::Edit) => cmd_edit(session, console),
                Some(Action::Delete) => cmd_delete(session, console),
                Some(Action::End) => return cmd_end(session, console),
                None => console.say(INVALID_ACTION),
            },
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => {}
            Err(SessionError::InputClosed) => {
                debug!("input closed, ending session");
                return cmd_end(session, console);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Repeat an editor until it accepts, reporting each rejection.
fn until_accepted<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut editor: impl FnMut(&mut Console<R, W>) -> Result<FieldOutcome>,
) -> Result<()> {
    loop {
        match editor(console)? {
            FieldOutcome::Accepted => return Ok(()),
            FieldOutcome::Rejected(e) => console.say(&e.to_string())?,
        }
    }
}

/// Walk a new task through priority, date, time and body, then append it.
///
/// A blank body discards the task.
pub fn cmd_add<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    let mut task = Task::new();
    until_accepted(console, |c| set_priority(c, &mut task))?;
    until_accepted(console, |c| set_date(c, &mut task))?;
    until_accepted(console, |c| set_date_time(c, &mut task, session.now()))?;
    if set_task_text(console, &mut task)?.is_accepted() {
        session.db.push(task);
        info!(number = session.db.len(), "task added");
    } else {
        debug!("blank task discarded");
    }
    Ok(())
}

/// Print the task table.
pub fn cmd_print<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> Result<()> {
    for line in table::render(&session.db.tasks) {
        console.say(&line)?;
    }
    Ok(())
}

/// Print the table and ask for a task number until a valid one is given.
///
/// Returns the list position, or `None` when the list is empty.
fn select_task<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> Result<Option<usize>> {
    if session.db.is_empty() {
        console.say(NO_TASKS)?;
        return Ok(None);
    }
    cmd_print(session, console)?;
    let prompt = format!("Input the task number (1-{}):", session.db.len());
    loop {
        let input = console.ask(&prompt)?;
        match session.db.resolve_number(&input) {
            Some(idx) => return Ok(Some(idx)),
            None => console.say(INVALID_NUMBER)?,
        }
    }
}

/// Overwrite one field of a chosen task.
///
/// The new value is not checked: an invalid entry leaves the field unset and
/// the change is still reported.
pub fn cmd_edit<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    let Some(idx) = select_task(session, console)? else {
        return Ok(());
    };
    let field = loop {
        let input = console.ask(FIELD_PROMPT)?;
        match parse_edit_field(input.trim()) {
            Some(field) => break field,
            None => console.say(INVALID_FIELD)?,
        }
    };
    let now = session.now();
    let task = &mut session.db.tasks[idx];
    let outcome = match field {
        EditField::Priority => set_priority(console, task)?,
        EditField::Date => set_date(console, task)?,
        EditField::Time => set_date_time(console, task, now)?,
        EditField::Task => set_task_text(console, task)?,
    };
    if let FieldOutcome::Rejected(e) = &outcome {
        debug!(number = idx + 1, ?field, error = %e, "edit left field unset");
    }
    info!(number = idx + 1, ?field, "task edited");
    console.say(TASK_CHANGED)
}

/// Remove a chosen task. Later tasks move up one number.
pub fn cmd_delete<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    let Some(idx) = select_task(session, console)? else {
        return Ok(());
    };
    session.db.remove(idx + 1);
    info!(number = idx + 1, remaining = session.db.len(), "task deleted");
    console.say(TASK_DELETED)
}

/// Save the list and say goodbye.
pub fn cmd_end<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> Result<()> {
    session.db.save(&session.db_path)?;
    console.say(EXITING)
}
