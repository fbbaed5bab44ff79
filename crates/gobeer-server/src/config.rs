//! Server configuration
//!
//! Read from Shuttle secrets, falling back to environment variables
//! (a `.env` file is loaded at startup when present).

use std::time::Duration;

use shuttle_runtime::SecretStore;

const DEFAULT_EMAIL_API_URL: &str = "http://localhost:3001";
const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the GoBeer API server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the email notification service
    pub email_api_url: String,
    /// Timeout for a single notification call
    pub notify_timeout: Duration,
    /// Deadline for handling a whole request
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            email_api_url: DEFAULT_EMAIL_API_URL.to_string(),
            notify_timeout: Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Load from Shuttle secrets, then the process environment
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key lookup; unset or unparsable values use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secs = |key: &str, default: u64| {
            let value = lookup(key).and_then(|s| match s.trim().parse::<u64>() {
                Ok(v) if v > 0 => Some(v),
                _ => {
                    tracing::warn!("Ignoring invalid {}: {:?}", key, s);
                    None
                }
            });
            Duration::from_secs(value.unwrap_or(default))
        };

        Self {
            email_api_url: lookup("EMAIL_API_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            notify_timeout: secs("NOTIFY_TIMEOUT_SECS", DEFAULT_NOTIFY_TIMEOUT_SECS),
            request_timeout: secs("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
