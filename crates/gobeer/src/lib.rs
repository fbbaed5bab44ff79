//! GoBeer Domain Library
//!
//! Core domain types, interfaces and use cases for the GoBeer catalog.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and errors
//!   - `entities/`: Core domain models (Beer, Review)
//!   - `errors/`: Domain error taxonomy and its classification
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Storage capabilities required by each use case
//!   - `services/`: External service interfaces (Notifier)
//!
//! - **Application** (`application/`): Use cases (adding, listing, reviewing)
//!
//! - **Adapters** (`adapters/`): In-process implementations of the ports
//!
//! # Usage
//!
//! ```rust,ignore
//! use gobeer::{AddingService, InMemoryStorage, NewBeer};
//!
//! let storage = Arc::new(InMemoryStorage::new());
//! let adding = AddingService::new(storage);
//! let beer = adding.add_beer(candidate).await?;
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use adapters::InMemoryStorage;
pub use application::{AddingService, ListingService, ReviewingService};
pub use domain::{parse_beer_id, Beer, DomainError, ErrorKind, NewBeer, NewReview, Review};
pub use ports::{AddingRepository, ListingRepository, Notifier, ReviewingRepository};
