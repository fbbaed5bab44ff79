//! Review - User reviews of a beer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use gobeer::{NewReview, Review};

use super::FieldErrors;

/// Create Review request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateReviewRequest {
    pub user_id: Option<String>,
    pub score: Option<f64>,
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    /// Validate required fields and build the domain candidate
    pub fn validate(self) -> Result<NewReview, FieldErrors> {
        let mut errors = FieldErrors::default();

        let user_id = errors.required("user_id", self.user_id);
        let comment = errors.required("comment", self.comment);
        let score = self.score.unwrap_or_else(|| {
            errors.add("score", "required");
            0.0
        });

        errors.finish(NewReview {
            user_id,
            score,
            comment,
        })
    }
}

/// Review response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub beer_id: Uuid,
    pub user_id: String,
    pub score: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            beer_id: review.beer_id,
            user_id: review.user_id,
            score: review.score,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
