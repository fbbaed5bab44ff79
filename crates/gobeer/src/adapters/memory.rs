//! In-memory implementation of the repository ports
//!
//! Mirrors the relational storage: (name, brewery) is unique, reviews must
//! reference an existing beer, and scores are averaged at read time.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Beer, DomainError, Review};
use crate::ports::{AddingRepository, ListingRepository, ReviewingRepository};

/// In-memory storage for beers and reviews
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    beers: RwLock<Vec<Beer>>,
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average of the given beer's review scores, 0 when it has none
    fn average_score(reviews: &[Review], beer_id: Uuid) -> f64 {
        let (sum, count) = reviews
            .iter()
            .filter(|r| r.beer_id == beer_id)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.score, count + 1));

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    fn with_score(beer: &Beer, reviews: &[Review]) -> Beer {
        Beer {
            score: Self::average_score(reviews, beer.id),
            ..beer.clone()
        }
    }
}

#[async_trait]
impl AddingRepository for InMemoryStorage {
    async fn create_beer(&self, beer: &Beer) -> Result<(), DomainError> {
        let mut beers = self.beers.write().await;

        if beers
            .iter()
            .any(|b| b.name == beer.name && b.brewery == beer.brewery)
        {
            return Err(DomainError::AlreadyExists);
        }
        if beers.iter().any(|b| b.id == beer.id) {
            return Err(DomainError::Repository(format!(
                "duplicate beer id {}",
                beer.id
            )));
        }

        beers.push(beer.clone());
        Ok(())
    }

    async fn beer_exists(&self, name: &str, brewery: &str) -> Result<bool, DomainError> {
        let beers = self.beers.read().await;
        Ok(beers.iter().any(|b| b.name == name && b.brewery == brewery))
    }
}

#[async_trait]
impl ListingRepository for InMemoryStorage {
    async fn list_beers(&self) -> Result<Vec<Beer>, DomainError> {
        let beers = self.beers.read().await;
        let reviews = self.reviews.read().await;

        Ok(beers
            .iter()
            .map(|beer| Self::with_score(beer, &reviews))
            .collect())
    }

    async fn list_reviews(&self, beer_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;

        // Reverse insertion order first so equal timestamps stay newest-first
        let mut found: Vec<Review> = reviews
            .iter()
            .rev()
            .filter(|r| r.beer_id == beer_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(found)
    }
}

#[async_trait]
impl ReviewingRepository for InMemoryStorage {
    async fn get_beer(&self, id: Uuid) -> Result<Beer, DomainError> {
        let beers = self.beers.read().await;
        let reviews = self.reviews.read().await;

        beers
            .iter()
            .find(|b| b.id == id)
            .map(|beer| Self::with_score(beer, &reviews))
            .ok_or(DomainError::NotFound)
    }

    async fn create_review(&self, review: &Review) -> Result<(), DomainError> {
        let beers = self.beers.read().await;
        if !beers.iter().any(|b| b.id == review.beer_id) {
            return Err(DomainError::Repository(format!(
                "review references unknown beer {}",
                review.beer_id
            )));
        }

        self.reviews.write().await.push(review.clone());
        Ok(())
    }
}
