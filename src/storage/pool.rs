//! Database connection pool management.
//!
//! The exporter only ever reads, so the pool is opened read-only and never
//! creates the database file: a missing or unreadable file surfaces as a
//! connection error rather than a fresh empty database.

use std::path::Path;
use std::sync::Arc;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use super::DbPool;

/// Initializes and returns a read-only database connection pool.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be opened as a SQLite database.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePool::connect_with(options).await.map_err(|e| {
        error!("Failed to connect to database {}: {e}", db_path.display());
        e
    })?;

    debug!("Opened database {}", db_path.display());

    Ok(Arc::new(pool))
}
