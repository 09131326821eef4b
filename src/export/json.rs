//! Table scan and JSON file output.

use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use sqlx::{Pool, Sqlite};

use crate::error_handling::ExportError;

use super::row::{quote_ident, row_to_object};

/// Fetches every row of `table` and materializes it as a JSON array.
///
/// Issues a full-table scan and shapes each row into a column-name-keyed
/// object, in database-returned order. The whole table is held in memory;
/// there is no streaming.
///
/// # Errors
///
/// Returns `sqlx::Error` if the scan fails (missing table, corrupted
/// database, disk error).
pub async fn export_table(pool: &Pool<Sqlite>, table: &str) -> Result<Vec<Value>, sqlx::Error> {
    let query = format!("SELECT * FROM {}", quote_ident(table));
    let rows = sqlx::query(&query).fetch_all(pool).await?;

    let mut objects = Vec::with_capacity(rows.len());
    for row in &rows {
        objects.push(row_to_object(row)?);
    }

    debug!("Fetched {} row(s) from table {table}", objects.len());

    Ok(objects)
}

/// Serializes `rows` as a JSON array and writes `<output_dir>/<table>.json`.
///
/// The file is created or truncated in a single write; an empty table
/// produces `[]`.
///
/// The table name is used verbatim as the file stem. A name containing a
/// path separator (legal in SQLite, e.g. `CREATE TABLE "a/b"`) resolves
/// into a subdirectory of `output_dir` and fails with a `Write` error if
/// that subdirectory does not exist.
///
/// # Errors
///
/// Returns `ExportError::Write` if the file cannot be created or written.
pub async fn write_export(
    output_dir: &Path,
    table: &str,
    rows: &[Value],
) -> Result<PathBuf, ExportError> {
    let path = output_dir.join(format!("{table}.json"));
    let body = serde_json::to_vec(rows).map_err(|e| ExportError::Write {
        path: path.clone(),
        source: std::io::Error::other(e),
    })?;

    tokio::fs::write(&path, body)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
