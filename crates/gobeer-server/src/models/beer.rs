//! Beer - Catalog entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use gobeer::{Beer, NewBeer};

use super::FieldErrors;

/// Create Beer request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBeerRequest {
    pub name: Option<String>,
    pub brewery: Option<String>,
    pub style: Option<String>,
    /// Alcohol by volume, in percent
    pub abv: Option<f64>,
    pub short_desc: Option<String>,
}

impl CreateBeerRequest {
    /// Validate required fields and build the domain candidate
    pub fn validate(self) -> Result<NewBeer, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = errors.required("name", self.name);
        let brewery = errors.required("brewery", self.brewery);
        let style = errors.required("style", self.style);
        let short_desc = errors.required("short_desc", self.short_desc);
        let abv = match self.abv {
            Some(abv) if abv.is_finite() && abv > 0.0 => abv,
            Some(_) => {
                errors.add("abv", "positive");
                0.0
            }
            None => {
                errors.add("abv", "required");
                0.0
            }
        };

        errors.finish(NewBeer {
            name,
            brewery,
            style,
            abv,
            short_desc,
        })
    }
}

/// Beer response
#[derive(Debug, Serialize, ToSchema)]
pub struct BeerResponse {
    pub id: Uuid,
    pub name: String,
    pub brewery: String,
    pub style: String,
    pub abv: f64,
    pub short_desc: String,
    /// Average score of all reviews, 0 when unreviewed
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            name: beer.name,
            brewery: beer.brewery,
            style: beer.style,
            abv: beer.abv,
            short_desc: beer.short_desc,
            score: beer.score,
            created_at: beer.created_at,
        }
    }
}
