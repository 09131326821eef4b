//! sqlite2json library: batch export of a SQLite database to JSON files
//!
//! This library reads every table in a SQLite database file and writes one
//! JSON document per table into an output directory: `<output_dir>/<table>.json`,
//! each containing a JSON array of that table's rows in database-returned
//! order, each row as a JSON object keyed by column name.
//!
//! # Example
//!
//! ```no_run
//! use sqlite2json::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     db_path: std::path::PathBuf::from("app.db"),
//!     output: std::path::PathBuf::from("./results"),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Exported {} tables ({} rows)", report.tables_exported, report.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod storage;
mod validation;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, ValidationError};
pub use run::{run_export, ExportReport};

// Internal run module (contains the export orchestration)
mod run {
    use std::path::PathBuf;

    use log::info;

    use crate::config::Config;
    use crate::error_handling::ExportError;
    use crate::export::{export_table, write_export};
    use crate::storage::{init_db_pool_with_path, list_tables};
    use crate::validation::{validate_db_path, validate_output_dir};

    /// Results of an export run.
    ///
    /// Contains summary statistics about the completed export.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Number of tables exported (one output file each)
        pub tables_exported: usize,
        /// Total number of rows across all exported tables
        pub total_rows: usize,
        /// Directory the JSON files were written to
        pub output_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full database export with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the input
    /// and output paths, opens the database, and writes one JSON file per
    /// table into the output directory. Control flow is strictly sequential:
    /// tables are exported one at a time in catalog order, and the first
    /// failure aborts the remaining tables (files already written are left
    /// in place). The connection is closed on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if:
    /// - `db_path` is not an existing file with a recognized SQLite extension
    /// - the output directory cannot be created or is not writable
    /// - the database cannot be opened, the catalog cannot be listed, or a
    ///   table scan fails
    /// - an output file cannot be written
    pub async fn run_export(config: Config) -> Result<ExportReport, ExportError> {
        let db_path = validate_db_path(&config.db_path)?;
        let output_dir = validate_output_dir(&config.output)?;

        let start_time = std::time::Instant::now();

        let pool = init_db_pool_with_path(&db_path).await?;

        // Run the whole export before closing, so the pool is released on
        // error paths as well as on success.
        let result = export_all_tables(pool.as_ref(), &output_dir).await;
        pool.close().await;
        let (tables_exported, total_rows) = result?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Exported {tables_exported} table(s), {total_rows} row(s) in {elapsed_seconds:.2}s"
        );

        Ok(ExportReport {
            tables_exported,
            total_rows,
            output_dir,
            elapsed_seconds,
        })
    }

    async fn export_all_tables(
        pool: &sqlx::Pool<sqlx::Sqlite>,
        output_dir: &std::path::Path,
    ) -> Result<(usize, usize), ExportError> {
        let tables = list_tables(pool).await?;
        info!("Found {} table(s) in catalog", tables.len());

        let mut total_rows = 0;
        for table in &tables {
            let rows = export_table(pool, table).await?;
            total_rows += rows.len();
            let path = write_export(output_dir, table, &rows).await?;
            info!("Wrote {} ({} row(s))", path.display(), rows.len());
        }

        Ok((tables.len(), total_rows))
    }
}
