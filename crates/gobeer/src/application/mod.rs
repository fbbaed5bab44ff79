//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services. Services hold no mutable state
//! and are safe to share across concurrent requests.

mod adding_service;
mod listing_service;
mod reviewing_service;

pub use adding_service::AddingService;
pub use listing_service::ListingService;
pub use reviewing_service::ReviewingService;
