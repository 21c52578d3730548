//! Webhook sender trait and implementations.

use async_trait::async_trait;
use slack_webhook::{SlackClient, SlackMessage, WebhookError};
use tracing::info;

/// Trait for delivering a Slack message to a webhook URL.
///
/// Abstracted so the handler can run against Slack, a dry run, or tests.
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// Post `message` to `url` and return the HTTP status the webhook answered with.
    async fn send(&self, url: &str, message: &SlackMessage) -> Result<u16, WebhookError>;
}

#[async_trait]
impl WebhookSender for SlackClient {
    async fn send(&self, url: &str, message: &SlackMessage) -> Result<u16, WebhookError> {
        self.post(url, message).await
    }
}

/// A sender that logs the payload instead of posting it.
#[derive(Debug, Clone, Default)]
pub struct LoggingSender;

#[async_trait]
impl WebhookSender for LoggingSender {
    async fn send(&self, _url: &str, message: &SlackMessage) -> Result<u16, WebhookError> {
        let payload = serde_json::to_string_pretty(message)?;
        info!("[dry run] Slack payload:\n{}", payload);
        Ok(200)
    }
}
