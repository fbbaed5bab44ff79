//! Adding Application Service (Use Case)
//!
//! Creates beers after checking the (name, brewery) pair is still free.

use std::sync::Arc;

use crate::domain::{Beer, DomainError, NewBeer};
use crate::ports::AddingRepository;

/// Application service for adding beers
pub struct AddingService<R: AddingRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AddingRepository + ?Sized> AddingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Add a new beer to the catalog.
    ///
    /// The existence check and the insert are separate calls, so two
    /// concurrent adds of the same pair can both pass the check. Storage
    /// is expected to reject the second insert with `AlreadyExists`.
    #[tracing::instrument(
        skip(self, candidate),
        fields(name = %candidate.name, brewery = %candidate.brewery)
    )]
    pub async fn add_beer(&self, candidate: NewBeer) -> Result<Beer, DomainError> {
        let beer = Beer::new(candidate);

        if self.repo.beer_exists(&beer.name, &beer.brewery).await? {
            tracing::warn!("Beer already exists");
            return Err(DomainError::AlreadyExists);
        }

        self.repo.create_beer(&beer).await?;

        tracing::info!("Added beer: {} ({})", beer.name, beer.id);

        Ok(beer)
    }
}
