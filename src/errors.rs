//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Failed to write attachment {path:?}: {source}")]
    AttachmentWrite { path: PathBuf, source: io::Error },

    #[error("Failed to write table {path:?}: {source}")]
    TableWrite { path: PathBuf, source: io::Error },

    #[error("Failed to read table {path:?}: {reason}")]
    TableRead { path: PathBuf, reason: String },

    #[error("Table {path:?} has unexpected columns [{found}], expected [{expected}]")]
    SchemaMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid category code: {0}")]
    InvalidCategory(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
