//! Storage module - the key-value capability history is persisted through.

mod memory_store;
mod storage_traits;

pub use memory_store::InMemoryKeyValueStore;
pub use storage_traits::KeyValueStoreTrait;
