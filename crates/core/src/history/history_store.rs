use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, warn};
use uuid::Uuid;

use super::{CalculationRecord, HistoryStoreTrait};
use crate::config::CalculatorConfig;
use crate::constants::{HISTORY_STORAGE_KEY, MAX_HISTORY_ITEMS};
use crate::errors::{Error, Result};
use crate::storage::KeyValueStoreTrait;
use crate::valuation::Valuation;

/// History persisted as one JSON array under a single key.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStoreTrait>,
    storage_key: String,
    max_items: usize,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStoreTrait>) -> Self {
        HistoryStore {
            store,
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            max_items: MAX_HISTORY_ITEMS,
        }
    }

    pub fn with_config(store: Arc<dyn KeyValueStoreTrait>, config: &CalculatorConfig) -> Self {
        HistoryStore {
            store,
            storage_key: config.storage_key.clone(),
            max_items: config.max_history_items.max(1),
        }
    }

    /// Strict read: storage and parse failures are returned to the caller.
    fn load(&self) -> Result<Vec<CalculationRecord>> {
        match self.store.get(&self.storage_key)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[CalculationRecord]) -> Result<()> {
        let blob = serde_json::to_string(records)
            .map_err(|e| Error::Unexpected(format!("Failed to serialize history: {}", e)))?;
        self.store.set(&self.storage_key, &blob)
    }
}

impl HistoryStoreTrait for HistoryStore {
    fn get_all(&self) -> Vec<CalculationRecord> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                warn!("Treating history '{}' as empty: {}", self.storage_key, e);
                Vec::new()
            }
        }
    }

    fn append(&self, valuation: &Valuation) -> bool {
        let mut records = self.get_all();
        let record = CalculationRecord::new(Uuid::new_v4().to_string(), valuation, Utc::now());
        debug!(
            "Appending {} calculation {} to history",
            record.method.code(),
            record.id
        );

        records.insert(0, record);
        records.truncate(self.max_items);

        match self.save(&records) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save calculation to history: {}", e);
                false
            }
        }
    }

    fn delete_at(&self, index: usize) -> bool {
        let mut records = self.get_all();
        if index >= records.len() {
            debug!(
                "Ignoring delete of history item {} (history has {} items)",
                index,
                records.len()
            );
            return false;
        }

        records.remove(index);
        match self.save(&records) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to delete history item {}: {}", index, e);
                false
            }
        }
    }

    fn clear(&self) -> bool {
        match self.store.remove(&self.storage_key) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to clear history: {}", e);
                false
            }
        }
    }
}
