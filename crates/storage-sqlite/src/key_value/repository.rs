use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KeyValueEntryDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::key_value_store::dsl::*;
use posudek_core::errors::Result;
use posudek_core::storage::KeyValueStoreTrait;

/// Durable key-value store backed by the `key_value_store` table.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueStore { pool }
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        key_value_store
            .select(store_key)
            .order(store_key.asc())
            .load::<String>(&mut conn)
            .into_core()
    }
}

impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        key_value_store
            .filter(store_key.eq(key))
            .select(store_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let entry = KeyValueEntryDB {
            store_key: key.to_string(),
            store_value: value.to_string(),
            updated_at: Utc::now().to_rfc3339(),
        };

        diesel::replace_into(key_value_store)
            .values(&entry)
            .execute(&mut conn)
            .into_core()?;

        debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let removed = diesel::delete(key_value_store.filter(store_key.eq(key)))
            .execute(&mut conn)
            .into_core()?;

        debug!("Removed '{}' ({} rows)", key, removed);
        Ok(())
    }
}
