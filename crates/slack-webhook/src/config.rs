//! Configuration types for slack-webhook.

use std::env;

use crate::error::WebhookError;

/// Environment variable holding the incoming webhook URL.
pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

/// Configuration for posting to a Slack incoming webhook.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Full webhook URL (e.g., "https://hooks.slack.com/services/T000/B000/XXXX").
    pub url: String,
}

impl WebhookConfig {
    /// Create a new configuration with the given webhook URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SLACK_WEBHOOK_URL` - Incoming webhook URL
    ///
    /// A blank value is treated the same as an unset one.
    pub fn from_env() -> Result<Self, WebhookError> {
        Self::from_env_opt()
            .ok_or_else(|| WebhookError::Config(format!("{} not set", WEBHOOK_URL_ENV)))
    }

    /// Like [`WebhookConfig::from_env`], but returns `None` when unconfigured.
    pub fn from_env_opt() -> Option<Self> {
        env::var(WEBHOOK_URL_ENV)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(Self::new)
    }
}

// The URL embeds the webhook secret; keep it out of logs.
impl std::fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let host = self
            .url
            .split("://")
            .nth(1)
            .and_then(|rest| rest.split('/').next())
            .unwrap_or("<invalid>");
        f.debug_struct("WebhookConfig")
            .field("host", &host)
            .finish()
    }
}
