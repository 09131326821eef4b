//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sqlite2json` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sqlite2json::initialization::init_logger_with;
use sqlite2json::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the export using the library
    match run_export(config).await {
        Ok(report) => {
            println!(
                "Exported {} table{} ({} row{}) in {:.1}s",
                report.tables_exported,
                if report.tables_exported == 1 { "" } else { "s" },
                report.total_rows,
                if report.total_rows == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            // Print the full error chain, not just the top-level message
            eprintln!("sqlite2json error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
