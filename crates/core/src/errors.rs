//! Core error types for the Posudek calculator.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator.
///
/// No variant is fatal: validation failures go back to the user as a prompt,
/// storage failures degrade to in-memory operation for that call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Stored history is malformed: {0}")]
    MalformedHistory(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Shorthand for `Error::Validation(ValidationError::InvalidInput(..))`.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }

    /// Returns true for errors the caller should answer by re-prompting the user.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// User-facing message for validation failures, without the error prefix.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(ValidationError::InvalidInput(msg)) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Backend-agnostic error type for key-value storage operations.
///
/// Uses `String` for details so storage crates can convert their own
/// error types into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage capability refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the store's byte quota.
    #[error("Storage quota exceeded: {required} bytes required, quota is {quota} bytes")]
    QuotaExceeded { required: usize, quota: usize },

    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for external error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedHistory(err.to_string())
    }
}
