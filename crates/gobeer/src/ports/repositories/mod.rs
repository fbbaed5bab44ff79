//! Repository Ports
//!
//! Storage capabilities, one trait per use case. A single storage backend
//! usually implements all of them.

mod adding_repository;
mod listing_repository;
mod reviewing_repository;

pub use adding_repository::*;
pub use listing_repository::*;
pub use reviewing_repository::*;
