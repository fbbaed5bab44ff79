//! GoBeer API Routes
//!
//! - /beers - Beer catalog (add, list)
//! - /beers/:id/reviews - Reviews of a beer (create, list)
//! - /debug/health - Liveness
//! - /swagger-ui - API documentation

pub mod beer;
pub mod error;
pub mod review;
pub mod swagger;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::AppState;

async fn health_check() -> &'static str {
    "OK"
}

/// Build the full application router
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/debug/health", get(health_check))
        .merge(beer::router())
        .merge(review::router())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::Router;
    use gobeer::{DomainError, InMemoryStorage, Notifier};

    use crate::config::ServerConfig;
    use crate::AppState;

    pub struct StubNotifier {
        fail: bool,
    }

    #[async_trait]
    impl Notifier for StubNotifier {
        async fn notify(&self, _user_id: &str) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::Notification("status code: 500".to_string()));
            }
            Ok(())
        }
    }

    fn build(fail: bool) -> Router {
        let state = AppState::new(
            Arc::new(InMemoryStorage::new()),
            Arc::new(StubNotifier { fail }),
        );
        super::app(state, &ServerConfig::default())
    }

    pub fn test_app() -> Router {
        build(false)
    }

    pub fn test_app_with_failing_notifier() -> Router {
        build(true)
    }
}
