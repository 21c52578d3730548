//! Error types for alarm-notifier.

use slack_webhook::WebhookError;
use thiserror::Error;

/// Errors that can occur while turning an alarm into a Slack notification.
///
/// None of these escape [`Notifier::handle`](crate::Notifier::handle); each
/// one is mapped to a [`HandlerResponse`](crate::HandlerResponse).
#[derive(Debug, Error)]
pub enum NotifierError {
    /// No webhook URL is configured. Reported as a skipped delivery.
    #[error("Slack webhook not configured")]
    MissingWebhook,

    /// The SNS message is not a CloudWatch alarm JSON document.
    #[error("Malformed alarm message: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    /// Serialization or transport failed while posting to the webhook.
    #[error(transparent)]
    Delivery(#[from] WebhookError),
}
