//! PostgreSQL Repository Implementations

mod storage;

pub use storage::PgStorage;
