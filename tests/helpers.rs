// Shared test helpers for fixture database setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::SqlitePool;
use std::path::Path;

/// Creates a fixture database file at `db_path` and returns a pool connected
/// to it. SQLite treats a zero-length file as an empty database, so the file
/// is pre-created and the pool connects with default options.
#[allow(dead_code)] // Used by other test files
pub async fn create_fixture_pool(db_path: &Path) -> SqlitePool {
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .read(true)
        .open(db_path)
        .expect("Failed to create fixture database file");

    let db_path_str = db_path.to_string_lossy().to_string();
    SqlitePool::connect(&format!("sqlite:{db_path_str}"))
        .await
        .expect("Failed to connect to fixture database")
}

/// Creates a `users` table with two rows: (1, "Ann") and (2, "Bo").
#[allow(dead_code)]
pub async fn create_users_table(pool: &SqlitePool) {
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .execute(pool)
        .await
        .expect("Failed to create users table");
    sqlx::query("INSERT INTO users (id, name) VALUES (1, 'Ann'), (2, 'Bo')")
        .execute(pool)
        .await
        .expect("Failed to insert users rows");
}
