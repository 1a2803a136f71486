//! # tasklist
//!
//! An interactive, single-user task list for the terminal.
//!
//! Each task has a priority (Critical, High, Normal, Low), a due date and
//! time, and a multi-line body. When the due time is entered the tool works
//! out an urgency marker (overdue, due today, upcoming) and shows both as
//! coloured cells in a fixed-width table.
//!
//! ## Session
//!
//! ```text
//! Input an action (add, print, edit, delete, end):
//! add
//! Input the task priority (C, H, N, L):
//! H
//! Input the date (yyyy-mm-dd):
//! 2024-01-01
//! Input the time (hh:mm):
//! 10:00
//! Input a new task (enter a blank line to end):
//! Buy milk
//!
//! Input an action (add, print, edit, delete, end):
//! end
//! Tasklist exiting!
//! ```
//!
//! The list is read from `taskList.json` in the working directory at startup
//! and written back when the session ends.

use std::io;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod cmd;
pub mod console;
pub mod db;
pub mod deadline;
pub mod editors;
pub mod error;
pub mod fields;
pub mod table;
pub mod task;

use cli::Cli;
use cmd::Session;
use console::Console;
use db::DEFAULT_DB_FILE;

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let db_path = Path::new(DEFAULT_DB_FILE);
    let mut session = Session::open(db_path).context("Failed to open task list")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    cmd::run(&mut session, &mut console).context("Task list session failed")?;
    Ok(())
}
