//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod email;
pub mod postgres;

// Re-exports
pub use email::EmailNotifier;
pub use postgres::PgStorage;
