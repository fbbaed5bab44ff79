//! Listing Application Service (Use Case)
//!
//! Read-only projections of beers and reviews.

use std::sync::Arc;

use crate::domain::{parse_beer_id, Beer, DomainError, Review};
use crate::ports::ListingRepository;

/// Application service for listing beers and reviews
pub struct ListingService<R: ListingRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ListingRepository + ?Sized> ListingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all beers with their average score
    pub async fn list_beers(&self) -> Result<Vec<Beer>, DomainError> {
        self.repo.list_beers().await
    }

    /// List the reviews of a beer, newest first.
    ///
    /// Beer existence is not checked here: a well-formed but unknown ID
    /// yields an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn list_reviews(&self, beer_id: &str) -> Result<Vec<Review>, DomainError> {
        let id = parse_beer_id(beer_id)?;
        self.repo.list_reviews(id).await
    }
}
