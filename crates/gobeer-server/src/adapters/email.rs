//! Email Notifier Implementation
//!
//! Tells the email service to notify a user, using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use gobeer::{DomainError, Notifier};

/// HTTP client for the email notification service
pub struct EmailNotifier {
    client: Client,
    base_url: String,
}

impl EmailNotifier {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gobeer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn notify_url(&self, user_id: &str) -> String {
        format!(
            "{}/users/{}/notify",
            self.base_url,
            urlencoding::encode(user_id)
        )
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    #[tracing::instrument(skip(self))]
    async fn notify(&self, user_id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.notify_url(user_id))
            .send()
            .await
            .map_err(|e| DomainError::Notification(format!("do: {e}")))?;

        if response.status() != StatusCode::OK {
            return Err(DomainError::Notification(format!(
                "status code: {}",
                response.status().as_u16()
            )));
        }

        tracing::debug!("User notified");
        Ok(())
    }
}
