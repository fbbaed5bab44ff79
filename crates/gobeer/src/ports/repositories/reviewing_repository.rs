//! Reviewing Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Beer, Review};

/// Storage capabilities required to review beers
#[async_trait]
pub trait ReviewingRepository: Send + Sync {
    /// Find a beer by ID. Fails with [`DomainError::NotFound`] when absent.
    async fn get_beer(&self, id: Uuid) -> Result<Beer, DomainError>;

    /// Persist a new Review
    async fn create_review(&self, review: &Review) -> Result<(), DomainError>;
}
