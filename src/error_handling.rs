//! Error types.
//!
//! All failures propagate synchronously to the top-level invocation and
//! terminate the run; there is no retry or skip-and-continue anywhere.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for input and output validation.
///
/// All three kinds are reported before any database connection is opened and
/// abort the run immediately.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The source path is missing, not a regular file, or does not carry a
    /// recognized SQLite extension.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The output directory did not exist and could not be created.
    #[error("failed to create output directory {path}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },

    /// The output path exists but is not a writable directory.
    #[error("invalid output: {0}")]
    InvalidOutput(String),
}

/// Error types for an export run.
///
/// Every failure aborts the remaining tables; files written for earlier
/// tables are left in place.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Input or output validation failed before any table was processed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Opening the database, listing the catalog, or fetching a table failed.
    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),

    /// An output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The output file that could not be written.
        path: PathBuf,
        /// The underlying filesystem error.
        source: std::io::Error,
    },
}
