//! Beer - Reviewable catalog product
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Beer - catalog entity
///
/// `score` is the average of all review scores for this beer. It is derived
/// by storage at read time and is never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: Uuid,
    pub name: String,
    pub brewery: String,
    pub style: String,
    pub abv: f64,
    pub short_desc: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// Candidate for a new Beer, as supplied by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBeer {
    pub name: String,
    pub brewery: String,
    pub style: String,
    pub abv: f64,
    pub short_desc: String,
}

impl Beer {
    /// Create a new Beer with generated ID, zero score and current timestamp
    pub fn new(candidate: NewBeer) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: candidate.name,
            brewery: candidate.brewery,
            style: candidate.style,
            abv: candidate.abv,
            short_desc: candidate.short_desc,
            score: 0.0,
            created_at: Utc::now(),
        }
    }
}

/// Parse a client-supplied beer ID.
///
/// Beer IDs are UUIDs; anything else is rejected with [`DomainError::InvalidId`].
pub fn parse_beer_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId)
}
