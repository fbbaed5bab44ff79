//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Beer: Reviewable catalog product
//! - Review: Scored, commented evaluation of one Beer

mod beer;
mod review;

pub use beer::*;
pub use review::*;
