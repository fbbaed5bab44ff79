//! GoBeer API Data Models
//!
//! Request/response DTOs for the HTTP API.
//! - Beer: Catalog entries
//! - Review: User reviews of a beer
//! - Error: Error response body

mod beer;
mod error;
mod review;

pub use beer::*;
pub use error::*;
pub use review::*;
