//! Database model for key-value entries.

use diesel::prelude::*;

/// One row of the key-value table
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::key_value_store)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KeyValueEntryDB {
    pub store_key: String,
    pub store_value: String,
    /// RFC 3339 time of the last write
    pub updated_at: String,
}
