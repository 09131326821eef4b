//! Configuration and CLI surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// File extensions recognized as SQLite databases.
///
/// This is a naming heuristic, not a format check: a file with one of these
/// extensions passes input validation and only fails later, at connection or
/// query time, if it is not actually a SQLite database.
pub const SQLITE_EXTENSIONS: &[&str] = &[".sqlite", ".sqlite3", ".db", ".db3", ".s3db", ".sl3"];

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./results";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational messages and above.
    Info,
    /// Debug messages and above.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors.
    Plain,
    /// One JSON object per line.
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// It doubles as the library configuration: construct it directly (or via
/// `Default` plus struct update syntax) when calling [`crate::run_export`]
/// programmatically.
///
/// # Examples
///
/// ```bash
/// # Export into ./results
/// sqlite2json app.db
///
/// # Export into a custom directory
/// sqlite2json app.sqlite3 --output ./dump
/// ```
#[derive(Clone, Debug, Parser)]
#[command(
    name = "sqlite2json",
    about = "Exports every table in a SQLite database to one JSON file per table."
)]
pub struct Config {
    /// Path to the SQLite database to export
    #[arg(value_parser)]
    pub db_path: PathBuf,

    /// Output directory for the per-table JSON files
    #[arg(long, short = 'o', value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
