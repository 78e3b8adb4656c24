//! Connection pooling, migrations and setup for the SQLite database.

use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, SqliteStorageError};
use posudek_core::errors::{Error, Result, StorageError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File name of the database inside the application data directory.
pub const DB_FILE_NAME: &str = "posudek.db";

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Ensures the data directory exists and the database file is in WAL mode.
/// Returns the database path.
pub fn init(app_data_dir: &Path) -> Result<String> {
    let db_path = get_db_path(app_data_dir);

    if !app_data_dir.exists() {
        fs::create_dir_all(app_data_dir).into_core()?;
    }

    let db_path_str = db_path.to_str().ok_or_else(|| {
        Error::Storage(StorageError::Internal(format!(
            "Database path is not valid UTF-8: {}",
            db_path.display()
        )))
    })?;

    let mut conn = SqliteConnection::establish(db_path_str).into_core()?;
    conn.batch_execute(
        "
            PRAGMA journal_mode = WAL;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
    )
    .into_core()?;

    Ok(db_path_str.to_string())
}

pub fn get_db_path(app_data_dir: &Path) -> PathBuf {
    app_data_dir.join(DB_FILE_NAME)
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(4)
        .min_idle(Some(1)) // Keep at least one connection ready
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer {}))
        .build(manager)
        .map_err(|e| Error::Storage(StorageError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::from(SqliteStorageError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &applied {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

/// Creates the data directory, opens a pool and applies migrations.
pub fn open(app_data_dir: &Path) -> Result<Arc<DbPool>> {
    let db_path = init(app_data_dir)?;
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    Ok(pool)
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(
            "
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
        )
        .map_err(r2d2::Error::QueryError)?;

        Ok(())
    }
}
