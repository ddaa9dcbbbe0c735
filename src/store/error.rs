//! Data store error types
//!
//! Defines all errors that can occur while opening or reading the
//! climate database.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the data store layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database file does not exist
    #[error("Database not found: {0:?}")]
    NotFound(PathBuf),

    /// Expected tables are missing or malformed
    #[error("Schema error: {0}")]
    Schema(String),

    /// A stored date is not a valid ISO date
    #[error("Corrupt date in database: {value:?}")]
    CorruptDate { value: String },

    /// Import target already exists
    #[error("Refusing to overwrite existing database: {0:?}")]
    AlreadyExists(PathBuf),

    /// Import source row could not be read
    #[error("Import error in {file} row {row}: {reason}")]
    Import {
        file: String,
        row: usize,
        reason: String,
    },

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for data store operations
pub type StoreResult<T> = Result<T, StoreError>;
