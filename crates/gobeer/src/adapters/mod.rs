//! Adapters
//!
//! In-process implementations of the ports. Infrastructure-backed
//! implementations (Postgres, HTTP) live in the server crate.

mod memory;

pub use memory::InMemoryStorage;
