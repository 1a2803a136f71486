//! Error types.

use thiserror::Error;

/// Failures of the storage file.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to read task file {path}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Task file {path} is not a valid task list")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to write task file {path}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to encode task list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Rejected user input. Always recoverable; the caller reprompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("The input priority is invalid")]
    Priority,

    #[error("The input date is invalid")]
    Date,

    #[error("The input time is invalid")]
    Time,

    #[error("A due time needs a valid date first")]
    MissingDate,

    #[error("The task is blank")]
    BlankText,
}

/// Failures that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console input closed")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Db(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
