//! Key-value storage traits.

use crate::errors::Result;

/// String key-value capability provided by the host environment.
///
/// Implementations report failures as `Error::Storage`; callers decide
/// whether a failure is fatal for their operation.
pub trait KeyValueStoreTrait: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
