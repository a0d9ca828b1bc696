//! Unified application error type.
//! All modules (store, db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid grade: {0} (expected one of A, B, C, D, E, F)")]
    InvalidGrade(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Id prefix '{0}' matches more than one entry")]
    AmbiguousId(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No identity recorded: sign in first with `studydesk signin`")]
    NotSignedIn,

    #[error("A semester must keep at least one course")]
    LastCourse,

    #[error("At least one semester must remain")]
    LastSemester,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Compression error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
