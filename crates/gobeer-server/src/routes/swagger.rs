//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    BeerResponse, CreateBeerRequest, CreateReviewRequest, ErrorResponse, ReviewResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Beer endpoints
        super::beer::list_beers,
        super::beer::add_beer,
        // Review endpoints
        super::review::list_reviews,
        super::review::create_review,
    ),
    info(
        title = "GoBeer API",
        version = "0.1.0",
        description = "Catalog of beers and their user reviews.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Beer", description = "Beer catalog"),
        (name = "Review", description = "User reviews of a beer"),
    ),
    components(
        schemas(
            // Beer
            CreateBeerRequest,
            BeerResponse,
            // Review
            CreateReviewRequest,
            ReviewResponse,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
