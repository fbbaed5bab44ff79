//! Beer Routes - Catalog management
//!
//! HTTP handlers that delegate to AddingService and ListingService.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::models::{BeerResponse, CreateBeerRequest, ErrorResponse};
use crate::routes::error::ApiError;
use crate::AppState;

/// List all beers
#[utoipa::path(
    get,
    path = "/beers",
    responses(
        (status = 200, description = "List of all beers with their average score", body = Vec<BeerResponse>),
        (status = 204, description = "No beers yet"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Beer"
)]
pub async fn list_beers(State(state): State<AppState>) -> Result<Response, ApiError> {
    let beers = state.listing.list_beers().await?;

    if beers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let responses: Vec<BeerResponse> = beers.into_iter().map(Into::into).collect();
    Ok(Json(responses).into_response())
}

/// Add a new beer
#[utoipa::path(
    post,
    path = "/beers",
    request_body = CreateBeerRequest,
    responses(
        (status = 201, description = "Beer added", body = BeerResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Beer already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Beer"
)]
pub async fn add_beer(
    State(state): State<AppState>,
    payload: Result<Json<CreateBeerRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidRequest)?;
    let candidate = payload.validate()?;

    let beer = state.adding.add_beer(candidate).await?;

    Ok((StatusCode::CREATED, Json(BeerResponse::from(beer))).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/beers", get(list_beers).post(add_beer))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::routes::test_support::test_app;

    const IPA: &str = r#"{"name":"IPA","brewery":"BrewDog","style":"IPA","abv":5.5,"short_desc":"..."}"#;

    fn post_beer(body: &str) -> Request<Body> {
        Request::post("/beers")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_add_beer_returns_201() {
        let app = test_app();

        let response = app.oneshot(post_beer(IPA)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["name"], "IPA");
        assert_eq!(body["brewery"], "BrewDog");
        assert_eq!(body["score"], 0.0);
        assert!(body["id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_add_duplicate_beer_returns_409() {
        let app = test_app();

        let first = app.clone().oneshot(post_beer(IPA)).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(post_beer(IPA)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(second).await["error"], "beer already exists");
    }

    #[tokio::test]
    async fn test_add_beer_missing_fields_returns_400() {
        let response = test_app()
            .oneshot(post_beer(r#"{"name":"IPA"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["fields"]["brewery"], "required");
        assert_eq!(body["fields"]["abv"], "required");
    }

    #[tokio::test]
    async fn test_add_beer_malformed_json_returns_400() {
        let response = test_app().oneshot(post_beer("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid request");
    }

    #[tokio::test]
    async fn test_list_beers_empty_returns_204() {
        let response = test_app()
            .oneshot(Request::get("/beers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_list_beers_returns_added_beer() {
        let app = test_app();
        app.clone().oneshot(post_beer(IPA)).await.unwrap();

        let response = app
            .oneshot(Request::get("/beers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["short_desc"], "...");
    }
}
