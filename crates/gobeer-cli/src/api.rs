//! GoBeer API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use gobeer::{Beer, Review};

/// API Client for GoBeer
pub struct GoBeerClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct CreateBeerRequest<'a> {
    pub name: &'a str,
    pub brewery: &'a str,
    pub style: &'a str,
    pub abv: f64,
    pub short_desc: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewRequest<'a> {
    pub user_id: &'a str,
    pub score: f64,
    pub comment: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    fields: Option<serde_json::Map<String, serde_json::Value>>,
}

impl GoBeerClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/debug/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all beers
    pub async fn list_beers(&self) -> Result<Vec<Beer>> {
        let url = format!("{}/beers", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to GoBeer API")?;

        Self::parse_list(resp).await
    }

    /// Add a beer
    pub async fn add_beer(&self, request: &CreateBeerRequest<'_>) -> Result<Beer> {
        let url = format!("{}/beers", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to GoBeer API")?;

        Self::parse(resp).await
    }

    /// List reviews of a beer, newest first
    pub async fn list_reviews(&self, beer_id: &str) -> Result<Vec<Review>> {
        let url = self.reviews_url(beer_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to GoBeer API")?;

        Self::parse_list(resp).await
    }

    /// Review a beer
    pub async fn add_review(
        &self,
        beer_id: &str,
        request: &CreateReviewRequest<'_>,
    ) -> Result<Review> {
        let url = self.reviews_url(beer_id);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to GoBeer API")?;

        Self::parse(resp).await
    }

    fn reviews_url(&self, beer_id: &str) -> String {
        format!(
            "{}/beers/{}/reviews",
            self.base_url,
            urlencoding::encode(beer_id)
        )
    }

    /// Lists come back as 204 when empty
    async fn parse_list<T: DeserializeOwned>(resp: Response) -> Result<Vec<T>> {
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        Self::parse(resp).await
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, describe_error(&body));
        }

        resp.json().await.context("Failed to parse response")
    }
}

/// Render an error body, listing invalid fields when present
fn describe_error(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error,
            fields: Some(fields),
        }) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(field, rule)| format!("{}: {}", field, rule.as_str().unwrap_or("invalid")))
                .collect();
            format!("{} ({})", error, fields.join(", "))
        }
        Ok(ErrorBody { error, .. }) => error,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use uuid::Uuid;

    #[test]
    fn test_describe_error() {
        assert_eq!(describe_error(r#"{"error":"beer not found"}"#), "beer not found");
        assert_eq!(
            describe_error(r#"{"error":"invalid request","fields":{"abv":"positive"}}"#),
            "invalid request (abv: positive)"
        );
        assert_eq!(describe_error("plain text"), "plain text");
    }

    #[tokio::test]
    async fn test_empty_list_is_no_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/beers");
                then.status(204);
            })
            .await;

        let client = GoBeerClient::new(&server.base_url());
        assert!(client.list_beers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_review_posts_json() {
        let server = MockServer::start_async().await;
        let beer_id = Uuid::new_v4();
        let review_id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/beers/{beer_id}/reviews"))
                    .json_body(serde_json::json!({"user_id": "u1", "score": 4.5, "comment": "good"}));
                then.status(201).json_body(serde_json::json!({
                    "id": review_id,
                    "beer_id": beer_id,
                    "user_id": "u1",
                    "score": 4.5,
                    "comment": "good",
                    "created_at": "2024-01-01T00:00:00Z"
                }));
            })
            .await;

        let client = GoBeerClient::new(&server.base_url());
        let review = client
            .add_review(
                &beer_id.to_string(),
                &CreateReviewRequest {
                    user_id: "u1",
                    score: 4.5,
                    comment: "good",
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(review.id, review_id);
        assert_eq!(review.score, 4.5);
    }

    #[test]
    fn test_reviews_url_encodes_beer_id() {
        let client = GoBeerClient::new("http://localhost:8000/");
        assert_eq!(
            client.reviews_url("a/b c"),
            "http://localhost:8000/beers/a%2Fb%20c/reviews"
        );
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/beers/not-a-uuid/reviews");
                then.status(400).json_body(serde_json::json!({"error": "invalid beer ID"}));
            })
            .await;

        let client = GoBeerClient::new(&server.base_url());
        let err = client.list_reviews("not-a-uuid").await.unwrap_err();
        assert!(err.to_string().contains("invalid beer ID"));
    }
}
