//! Service Ports
//!
//! Abstract interfaces for external services.

mod notifier;

pub use notifier::*;
