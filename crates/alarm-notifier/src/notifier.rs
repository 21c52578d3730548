//! The Lambda handler: one SNS alarm event in, one Slack post out.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slack_webhook::WebhookConfig;
use tracing::{error, info, warn};

use crate::alarm::AlarmEvent;
use crate::envelope::SnsEnvelope;
use crate::error::NotifierError;
use crate::format::build_message;
use crate::sender::WebhookSender;

/// Result handed back to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// Delivery skipped because no webhook is configured.
    pub fn skipped() -> Self {
        Self {
            status_code: 200,
            body: NotifierError::MissingWebhook.to_string(),
        }
    }

    /// Message posted, whatever status the webhook answered with.
    pub fn sent() -> Self {
        Self {
            status_code: 200,
            body: json_string("Notification sent to Slack"),
        }
    }

    /// Posting failed before a response was received.
    pub fn failed(err: &NotifierError) -> Self {
        Self {
            status_code: 500,
            body: json_string(&format!("Error: {}", err)),
        }
    }

    /// Whether this response reports a delivered or skipped notification.
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

// Success and failure bodies are JSON-encoded strings.
fn json_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

impl From<Result<u16, NotifierError>> for HandlerResponse {
    fn from(result: Result<u16, NotifierError>) -> Self {
        match result {
            Ok(_) => Self::sent(),
            Err(NotifierError::MissingWebhook) => Self::skipped(),
            Err(e) => Self::failed(&e),
        }
    }
}

/// Forwards CloudWatch alarm notifications to a Slack webhook.
#[derive(Debug, Clone)]
pub struct Notifier<S> {
    sender: S,
}

impl<S: WebhookSender> Notifier<S> {
    /// Create a notifier that delivers through `sender`.
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    /// Handle one SNS event, reading the webhook URL from the environment.
    ///
    /// Never fails: every outcome is folded into the response.
    pub async fn handle(&self, envelope: &SnsEnvelope) -> HandlerResponse {
        self.handle_with_config(envelope, WebhookConfig::from_env_opt())
            .await
    }

    /// Handle one SNS event with an explicit webhook configuration.
    pub async fn handle_with_config(
        &self,
        envelope: &SnsEnvelope,
        config: Option<WebhookConfig>,
    ) -> HandlerResponse {
        let result = self.notify(envelope, config).await;

        match &result {
            Ok(status) => info!("Slack notification sent: {}", status),
            Err(NotifierError::MissingWebhook) => {
                warn!("{} not configured", slack_webhook::WEBHOOK_URL_ENV)
            }
            Err(e) => error!("Error sending to Slack: {}", e),
        }

        result.into()
    }

    async fn notify(
        &self,
        envelope: &SnsEnvelope,
        config: Option<WebhookConfig>,
    ) -> Result<u16, NotifierError> {
        let config = config.ok_or(NotifierError::MissingWebhook)?;

        let event = AlarmEvent::from_message(envelope.first_message(), Utc::now());
        info!(
            alarm = %event.name,
            state = %event.state,
            region = %event.region,
            "Forwarding alarm to Slack"
        );

        let message = build_message(&event, Utc::now().timestamp());
        let status = self.sender.send(&config.url, &message).await?;
        Ok(status)
    }

    /// Get the underlying sender.
    pub fn sender(&self) -> &S {
        &self.sender
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use slack_webhook::{SlackMessage, WebhookError};
    use std::sync::Mutex;

    /// Records every post and answers with a fixed status.
    #[derive(Default)]
    struct RecordingSender {
        status: u16,
        sent: Mutex<Vec<(String, SlackMessage)>>,
    }

    impl RecordingSender {
        fn answering(status: u16) -> Self {
            Self {
                status,
                ..Default::default()
            }
        }

        fn sent(&self) -> Vec<(String, SlackMessage)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WebhookSender for RecordingSender {
        async fn send(&self, url: &str, message: &SlackMessage) -> Result<u16, WebhookError> {
            self.sent
                .lock()
                .unwrap()
                .push((url.to_string(), message.clone()));
            Ok(self.status)
        }
    }

    /// Fails every post the way a dead endpoint would.
    struct FailingSender;

    #[async_trait]
    impl WebhookSender for FailingSender {
        async fn send(&self, _url: &str, _message: &SlackMessage) -> Result<u16, WebhookError> {
            Err(WebhookError::Config("connection refused".to_string()))
        }
    }

    const HOOK: &str = "https://hooks.slack.com/services/T000/B000/XXXX";

    fn config() -> Option<WebhookConfig> {
        Some(WebhookConfig::new(HOOK))
    }

    fn high_cpu() -> SnsEnvelope {
        SnsEnvelope::from_message(
            r#"{"AlarmName":"HighCPU","NewStateValue":"ALARM","NewStateReason":"CPU > 90%","Region":"us-west-2","AlarmDescription":"🚨 CRITICAL"}"#,
        )
    }

    #[tokio::test]
    async fn test_high_cpu_scenario() {
        let notifier = Notifier::new(RecordingSender::answering(200));

        let response = notifier.handle_with_config(&high_cpu(), config()).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"Notification sent to Slack\"");

        let sent = notifier.sender().sent();
        assert_eq!(sent.len(), 1);
        let (url, message) = &sent[0];
        assert_eq!(url, HOOK);

        let card = &message.attachments[0];
        assert_eq!(card.title.as_deref(), Some("🚨 HighCPU"));
        assert_eq!(card.color, "#ff0000");
        assert_eq!(card.fields.len(), 4);
        assert_eq!(card.fields[0].value, "ALARM");
        assert_eq!(card.fields[1].value, "CRITICAL");
        assert_eq!(card.fields[2].value, "us-west-2");
        assert!(card.ts.unwrap() > 0);
    }

    #[tokio::test]
    async fn test_missing_webhook_skips_delivery() {
        let notifier = Notifier::new(RecordingSender::answering(200));

        let response = notifier.handle_with_config(&high_cpu(), None).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "Slack webhook not configured");
        assert!(response.is_success());
        assert!(notifier.sender().sent().is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_status_still_succeeds() {
        let notifier = Notifier::new(RecordingSender::answering(500));

        let response = notifier.handle_with_config(&high_cpu(), config()).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(notifier.sender().sent().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let notifier = Notifier::new(FailingSender);

        let response = notifier.handle_with_config(&high_cpu(), config()).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body,
            "\"Error: Invalid configuration: connection refused\""
        );
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_plain_text_message_is_delivered() {
        let notifier = Notifier::new(RecordingSender::answering(200));
        let envelope = SnsEnvelope::from_message("Budget exceeded");

        let response = notifier.handle_with_config(&envelope, config()).await;
        assert_eq!(response.status_code, 200);

        let sent = notifier.sender().sent();
        let card = &sent[0].1.attachments[0];
        assert_eq!(card.title.as_deref(), Some("⚠️ Unknown"));
        assert_eq!(card.text.as_deref(), Some("Budget exceeded"));
        assert_eq!(card.fields[0].value, "UNKNOWN");
        assert_eq!(card.color, "#ffcc00");
    }

    #[tokio::test]
    async fn test_empty_envelope_is_delivered() {
        let notifier = Notifier::new(RecordingSender::answering(200));

        let response = notifier
            .handle_with_config(&SnsEnvelope::default(), config())
            .await;
        assert_eq!(response.status_code, 200);
        assert_eq!(notifier.sender().sent().len(), 1);
    }

    #[tokio::test]
    async fn test_response_wire_format() {
        let value = serde_json::to_value(HandlerResponse::skipped()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"statusCode": 200, "body": "Slack webhook not configured"})
        );
    }

    // Env vars are process-global; keep every env scenario in this one test.
    #[tokio::test]
    async fn test_handle_reads_env() {
        let notifier = Notifier::new(RecordingSender::answering(200));

        std::env::remove_var(slack_webhook::WEBHOOK_URL_ENV);
        let response = notifier.handle(&high_cpu()).await;
        assert_eq!(response, HandlerResponse::skipped());
        assert!(notifier.sender().sent().is_empty());

        std::env::set_var(slack_webhook::WEBHOOK_URL_ENV, HOOK);
        let response = notifier.handle(&high_cpu()).await;
        assert_eq!(response, HandlerResponse::sent());
        assert_eq!(notifier.sender().sent()[0].0, HOOK);

        std::env::remove_var(slack_webhook::WEBHOOK_URL_ENV);
    }
}
