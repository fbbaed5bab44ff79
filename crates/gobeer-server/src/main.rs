use anyhow::Context;
use sqlx::PgPool;
use std::sync::Arc;

mod adapters;
mod config;
mod models;
mod routes;

use adapters::{EmailNotifier, PgStorage};
use config::ServerConfig;
use gobeer::{
    AddingRepository, AddingService, ListingRepository, ListingService, Notifier,
    ReviewingRepository, ReviewingService,
};

/// Type aliases for application services behind trait objects
pub type AppAddingService = AddingService<dyn AddingRepository>;
pub type AppListingService = ListingService<dyn ListingRepository>;
pub type AppReviewingService = ReviewingService<dyn ReviewingRepository, dyn Notifier>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub adding: Arc<AppAddingService>,
    pub listing: Arc<AppListingService>,
    pub reviewing: Arc<AppReviewingService>,
}

impl AppState {
    /// Wire the use cases to one storage backend and a notifier
    pub fn new<S>(storage: Arc<S>, notifier: Arc<dyn Notifier>) -> Self
    where
        S: AddingRepository + ListingRepository + ReviewingRepository + 'static,
    {
        let adding_repo: Arc<dyn AddingRepository> = storage.clone();
        let listing_repo: Arc<dyn ListingRepository> = storage.clone();
        let reviewing_repo: Arc<dyn ReviewingRepository> = storage;

        Self {
            adding: Arc::new(AddingService::new(adding_repo)),
            listing: Arc::new(ListingService::new(listing_repo)),
            reviewing: Arc::new(ReviewingService::new(reviewing_repo, notifier)),
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    dotenvy::dotenv().ok();

    tracing::info!("🍺 GoBeer API initializing...");

    let config = ServerConfig::from_secrets(&secrets);

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize notifier and application services
    let notifier = EmailNotifier::new(&config.email_api_url, config.notify_timeout)
        .context("Failed to build email notifier client")?;
    tracing::info!("📧 Email notifier targeting {}", config.email_api_url);

    let state = AppState::new(Arc::new(PgStorage::new(pool)), Arc::new(notifier));

    let router = routes::app(state, &config);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ GoBeer API ready");

    Ok(router.into())
}
