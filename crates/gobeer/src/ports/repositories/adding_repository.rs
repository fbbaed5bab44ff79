//! Adding Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Beer};

/// Storage capabilities required to add beers
#[async_trait]
pub trait AddingRepository: Send + Sync {
    /// Persist a new Beer
    async fn create_beer(&self, beer: &Beer) -> Result<(), DomainError>;

    /// Check if a beer with the given name and brewery already exists
    async fn beer_exists(&self, name: &str, brewery: &str) -> Result<bool, DomainError>;
}
