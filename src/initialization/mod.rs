//! Application initialization.
//!
//! Currently this covers logger setup; the database pool has its own
//! initialization in the storage module.

mod logger;

pub use logger::init_logger_with;
