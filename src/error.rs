//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when reading or writing the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running the query panicked or was cancelled
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
