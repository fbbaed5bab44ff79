//! Review Routes - Beer reviews
//!
//! HTTP handlers that delegate to ReviewingService and ListingService.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::models::{CreateReviewRequest, ErrorResponse, ReviewResponse};
use crate::routes::error::ApiError;
use crate::AppState;

/// List reviews of a beer, newest first
#[utoipa::path(
    get,
    path = "/beers/{id}/reviews",
    params(
        ("id" = String, Path, description = "Beer ID (UUID)")
    ),
    responses(
        (status = 200, description = "Reviews of the beer", body = Vec<ReviewResponse>),
        (status = 204, description = "No reviews for this beer"),
        (status = 400, description = "Invalid beer ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
) -> Result<Response, ApiError> {
    let reviews = state.listing.list_reviews(&beer_id).await?;

    if reviews.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let responses: Vec<ReviewResponse> = reviews.into_iter().map(Into::into).collect();
    Ok(Json(responses).into_response())
}

/// Review a beer
#[utoipa::path(
    post,
    path = "/beers/{id}/reviews",
    params(
        ("id" = String, Path, description = "Beer ID (UUID)")
    ),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created and user notified", body = ReviewResponse),
        (status = 400, description = "Invalid beer ID or request", body = ErrorResponse),
        (status = 404, description = "Beer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidRequest)?;
    let candidate = payload.validate()?;

    let review = state.reviewing.create_review(&beer_id, candidate).await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/beers/:id/reviews", get(list_reviews).post(create_review))
}
