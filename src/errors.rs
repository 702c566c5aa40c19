//! Unified application error type.
//! All modules (api, core, cli, config, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend / HTTP
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session expired, please login again")]
    SessionExpired,

    #[error("Not logged in (run `efforttrack login` first)")]
    SessionMissing,

    #[error("Backend error ({0}): {1}")]
    Backend(u16, String),

    #[error("Unexpected response shape from {0}: {1}")]
    Schema(String, String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unrecognized date key: {0}")]
    InvalidDateKey(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    // ---------------------------
    // Grid errors
    // ---------------------------
    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    #[error("Row {0} is already saved on the backend and cannot be deleted")]
    RowPersisted(usize),

    #[error("Cannot delete the last remaining row")]
    LastRow,

    #[error("Date {0} is outside the current range")]
    DateOutOfRange(String),

    // ---------------------------
    // Range navigation
    // ---------------------------
    #[error("{0}")]
    RangeBoundary(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Row {0} is missing required fields: {1}")]
    MissingFields(usize, String),

    #[error("Rows {0} and {1} are duplicates")]
    DuplicateRows(usize, usize),

    #[error("Cannot save future date: {0}")]
    FutureDate(String),

    #[error("Cannot save future dates ({0} to {1})")]
    FutureDates(String, String),

    #[error("No rows with content to save")]
    NothingToSave,

    // ---------------------------
    // Config / state errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Workspace error: {0}")]
    Workspace(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
