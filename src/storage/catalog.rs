//! Catalog introspection.

use sqlx::{Pool, Sqlite};

/// Lists every table name in the database's catalog.
///
/// Queries `sqlite_master` for entities of type `table`. Order is whatever
/// the catalog returns; it is stable across repeated runs against an
/// unmodified database but not guaranteed alphabetical. Internal tables such
/// as `sqlite_sequence` are included.
///
/// # Errors
///
/// Returns `sqlx::Error` if the catalog query fails (e.g., the file is not a
/// SQLite database).
pub async fn list_tables(pool: &Pool<Sqlite>) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(pool)
        .await
}
