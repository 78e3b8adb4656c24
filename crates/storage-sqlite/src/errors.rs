//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the storage-agnostic error types defined in `posudek_core`.

use diesel::result::Error as DieselError;
use posudek_core::errors::{Error, StorageError};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `posudek_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum SqliteStorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SqliteStorageError> for Error {
    fn from(err: SqliteStorageError) -> Self {
        let storage_error = match err {
            SqliteStorageError::ConnectionFailed(e) => {
                StorageError::ConnectionFailed(e.to_string())
            }
            SqliteStorageError::PoolError(e) => StorageError::Unavailable(e.to_string()),
            SqliteStorageError::QueryFailed(e) => StorageError::QueryFailed(e.to_string()),
            SqliteStorageError::MigrationFailed(e) => StorageError::MigrationFailed(e),
            SqliteStorageError::Io(e) => StorageError::Internal(e.to_string()),
        };
        Error::Storage(storage_error)
    }
}

/// Extension trait for easily converting Diesel Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, diesel::result::Error>`
/// which handles the conversion through SqliteStorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> posudek_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> posudek_core::Result<T> {
        self.map_err(|e| SqliteStorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> posudek_core::Result<T> {
        self.map_err(|e| SqliteStorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, diesel::ConnectionError> {
    fn into_core(self) -> posudek_core::Result<T> {
        self.map_err(|e| SqliteStorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, std::io::Error> {
    fn into_core(self) -> posudek_core::Result<T> {
        self.map_err(|e| SqliteStorageError::from(e).into())
    }
}
