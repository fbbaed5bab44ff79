//! Mapping of service errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use gobeer::{DomainError, ErrorKind};

use crate::models::{ErrorResponse, FieldErrors};

/// Errors a handler can fail with
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be parsed as the expected JSON
    InvalidRequest,
    /// Body parsed but required fields are missing or invalid
    Validation(FieldErrors),
    /// Failure returned by a use case
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<FieldErrors> for ApiError {
    fn from(e: FieldErrors) -> Self {
        Self::Validation(e)
    }
}

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidId => StatusCode::BAD_REQUEST,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("invalid request"),
            ),
            Self::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_fields("invalid request", fields),
            ),
            Self::Domain(e) => {
                let kind = e.kind();
                let message = match kind {
                    ErrorKind::Unclassified => {
                        tracing::error!(error = %e, "Request failed");
                        "internal server error".to_string()
                    }
                    _ => e.root().to_string(),
                };
                (status_for(kind), ErrorResponse::new(message))
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_for_kind() {
        assert_eq!(status_for(ErrorKind::InvalidId), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::AlreadyExists), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorKind::Unclassified),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_wrapped_not_found() {
        let err = DomainError::NotFound.context("get beer[id=abc]");
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "beer not found");
    }

    #[tokio::test]
    async fn test_internal_errors_do_not_leak() {
        let err = DomainError::Repository("password authentication failed".into())
            .context("create beer[id=abc] review");
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal server error");
        assert!(body.get("fields").is_none());
    }

    #[tokio::test]
    async fn test_validation_lists_fields() {
        let mut fields = FieldErrors::default();
        fields.add("name", "required");
        let response = ApiError::from(fields).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid request");
        assert_eq!(body["fields"]["name"], "required");
    }
}
