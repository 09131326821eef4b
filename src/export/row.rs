//! Row shaping and value decoding.
//!
//! The row-shaping step (column metadata + positional values into a named
//! mapping) is kept as a pure function so it can be tested without a
//! database. Decoding follows SQLite's storage classes:
//!
//! - `INTEGER` becomes a JSON number (i64)
//! - `REAL` becomes a JSON number; NaN and infinities become JSON `null`,
//!   since JSON has no representation for them
//! - `TEXT` becomes a JSON string
//! - `BLOB` becomes a base64 string (standard alphabet, padded), since JSON
//!   has no native binary type
//! - `NULL` becomes JSON `null`

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Quotes a table name as a SQL identifier.
///
/// Wraps the name in double quotes and doubles any embedded double quote, so
/// any name the catalog can legally contain is usable in a query. Identifiers
/// cannot be bound as query parameters in SQLite, so quoting is the only safe
/// way to interpolate one.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Shapes one row into an insertion-ordered JSON object.
///
/// `columns` and `values` are positionally aligned. Duplicate column names
/// (possible when a query returns two columns with the same name) resolve
/// last-write-wins.
pub fn shape_row(columns: &[&str], values: Vec<Value>) -> Map<String, Value> {
    let mut object = Map::with_capacity(columns.len());
    for (name, value) in columns.iter().zip(values) {
        object.insert((*name).to_string(), value);
    }
    object
}

/// Converts one fetched row into a JSON object keyed by column name.
///
/// # Errors
///
/// Returns `sqlx::Error` if a column value cannot be decoded.
pub fn row_to_object(row: &SqliteRow) -> Result<Value, sqlx::Error> {
    let columns: Vec<&str> = row.columns().iter().map(|c| c.name()).collect();
    let mut values = Vec::with_capacity(columns.len());
    for idx in 0..columns.len() {
        values.push(decode_value(row, idx)?);
    }
    Ok(Value::Object(shape_row(&columns, values)))
}

/// Decodes a single column value into its JSON representation.
fn decode_value(row: &SqliteRow, idx: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();
    drop(raw);

    match type_name.as_str() {
        "INTEGER" | "BOOLEAN" => Ok(Value::from(row.try_get::<i64, _>(idx)?)),
        "REAL" => {
            let f: f64 = row.try_get(idx)?;
            // from_f64 returns None for NaN and infinities
            Ok(serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null))
        }
        "BLOB" => {
            let bytes: Vec<u8> = row.try_get(idx)?;
            Ok(Value::String(BASE64.encode(bytes)))
        }
        // TEXT, plus anything SQLite reports under a declared type alias
        _ => Ok(Value::String(row.try_get::<String, _>(idx)?)),
    }
}
