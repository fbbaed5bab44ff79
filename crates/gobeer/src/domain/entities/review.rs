//! Review - A user's evaluation of one Beer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review of exactly one Beer by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub beer_id: Uuid,
    /// Reviewing user, already authenticated upstream
    pub user_id: String,
    pub score: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Candidate for a new Review, as supplied by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: String,
    pub score: f64,
    pub comment: String,
}

impl Review {
    /// Create a new Review for a beer with generated ID and current timestamp
    pub fn new(beer_id: Uuid, candidate: NewReview) -> Self {
        Self {
            id: Uuid::new_v4(),
            beer_id,
            user_id: candidate.user_id,
            score: candidate.score,
            comment: candidate.comment,
            created_at: Utc::now(),
        }
    }
}
