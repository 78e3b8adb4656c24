use std::collections::HashMap;
use std::sync::RwLock;

use log::warn;

use super::KeyValueStoreTrait;
use crate::errors::{Result, StorageError};

/// Process-local key-value store.
///
/// An optional byte quota mirrors browser storage limits: a `set` that would
/// push the summed key and value lengths over the quota fails with
/// `StorageError::QuotaExceeded` and leaves the previous value in place.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        InMemoryKeyValueStore {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> Result<usize> {
        let entries = self.read_entries()?;
        Ok(entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }

    fn read_entries(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, String>>> {
        self.entries
            .read()
            .map_err(|e| StorageError::Unavailable(format!("store lock poisoned: {}", e)).into())
    }

    fn write_entries(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.entries
            .write()
            .map_err(|e| StorageError::Unavailable(format!("store lock poisoned: {}", e)).into())
    }
}

impl KeyValueStoreTrait for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.write_entries()?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let required = others + key.len() + value.len();
            if required > quota {
                warn!(
                    "Refusing to store '{}': {} bytes exceed quota of {} bytes",
                    key, required, quota
                );
                return Err(StorageError::QuotaExceeded { required, quota }.into());
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write_entries()?.remove(key);
        Ok(())
    }
}
