// storage/mod.rs
// Database connection and catalog access

pub mod catalog;
pub mod pool;

pub use catalog::list_tables;
pub use pool::init_db_pool_with_path;

/// Shared handle to the SQLite connection pool.
pub type DbPool = std::sync::Arc<sqlx::Pool<sqlx::Sqlite>>;
