//! Listing Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Beer, Review};

/// Storage capabilities required to list beers and reviews
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Find all beers, each with its average review score
    async fn list_beers(&self) -> Result<Vec<Beer>, DomainError>;

    /// Find all reviews of a beer, newest first
    async fn list_reviews(&self, beer_id: Uuid) -> Result<Vec<Review>, DomainError>;
}
