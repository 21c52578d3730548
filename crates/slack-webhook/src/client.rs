//! Slack incoming-webhook HTTP client.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::error::WebhookError;
use crate::types::SlackMessage;

/// Client for posting messages to Slack incoming webhooks.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct SlackClient {
    http: Client,
}

impl SlackClient {
    /// Build a client with the transport's default timeouts.
    pub fn new() -> Result<Self, WebhookError> {
        let http = Client::builder().build().map_err(WebhookError::Http)?;
        Ok(Self { http })
    }

    /// Post a message to `url` and return the HTTP status code.
    ///
    /// Any response the webhook produces counts as delivered, including
    /// 4xx and 5xx. Only serialization and transport failures are errors.
    pub async fn post(&self, url: &str, message: &SlackMessage) -> Result<u16, WebhookError> {
        let body = serde_json::to_vec(message)?;

        debug!(bytes = body.len(), "Posting to Slack webhook");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(WebhookError::Http)?;

        Ok(response.status().as_u16())
    }
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient").finish_non_exhaustive()
    }
}
