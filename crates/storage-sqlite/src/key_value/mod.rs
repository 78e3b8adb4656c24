//! SQLite storage implementation for the key-value capability.

mod model;
mod repository;

pub use model::KeyValueEntryDB;
pub use repository::SqliteKeyValueStore;

// Re-export trait from core for convenience
pub use posudek_core::storage::KeyValueStoreTrait;
