//! Export functionality.
//!
//! This module turns whole tables into JSON documents: a full-table scan is
//! materialized in memory, each row is shaped into a column-name-keyed JSON
//! object, and the resulting array is written to `<output_dir>/<table>.json`.

mod json;
mod row;

pub use json::{export_table, write_export};
pub use row::{quote_ident, row_to_object, shape_row};
