//! SQLite storage implementation for Posudek.
//!
//! This crate provides the durable key-value backend using Diesel ORM with SQLite.
//! It implements the storage trait defined in `posudek-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The key-value repository backing the calculation history
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod key_value;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, open, run_migrations, DbConnection, DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, SqliteStorageError};

pub use key_value::SqliteKeyValueStore;

// Re-export from posudek-core for convenience
pub use posudek_core::errors::{Error, Result, StorageError};
