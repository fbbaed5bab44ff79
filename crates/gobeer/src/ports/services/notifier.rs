//! Notifier Port
//!
//! Informs a user that their review was recorded.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Notification interface used after a review is persisted
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notify the given user. Called at most once per review.
    async fn notify(&self, user_id: &str) -> Result<(), DomainError>;
}
