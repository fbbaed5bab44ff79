//! Reviewing Application Service (Use Case)
//!
//! Records reviews against existing beers and notifies the reviewer.

use std::sync::Arc;

use crate::domain::{parse_beer_id, DomainError, NewReview, Review};
use crate::ports::{Notifier, ReviewingRepository};

/// Application service for reviewing beers
pub struct ReviewingService<R: ReviewingRepository + ?Sized, N: Notifier + ?Sized> {
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R: ReviewingRepository + ?Sized, N: Notifier + ?Sized> ReviewingService<R, N> {
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    /// Create a review for an existing beer, then notify the reviewer.
    ///
    /// Notification happens after the review is persisted and is not rolled
    /// back: a notification error means the review exists but the user was
    /// not told.
    #[tracing::instrument(skip(self, candidate), fields(user_id = %candidate.user_id))]
    pub async fn create_review(
        &self,
        beer_id: &str,
        candidate: NewReview,
    ) -> Result<Review, DomainError> {
        let id = parse_beer_id(beer_id)?;

        self.repo
            .get_beer(id)
            .await
            .map_err(|e| e.context(format!("get beer[id={id}]")))?;

        let review = Review::new(id, candidate);

        self.repo
            .create_review(&review)
            .await
            .map_err(|e| e.context(format!("create beer[id={id}] review")))?;

        tracing::info!("Created review {} for beer {}", review.id, id);

        self.notifier
            .notify(&review.user_id)
            .await
            .map_err(|e| e.context(format!("notify user[id={}]", review.user_id)))?;

        Ok(review)
    }
}
