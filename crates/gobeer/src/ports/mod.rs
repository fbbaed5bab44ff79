//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the use cases
//! interact with external systems (storage, notification).
//!
//! Implementations of these traits live in the adapters layer.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
