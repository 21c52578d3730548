//! CloudWatch alarm to Slack notifier.
//!
//! This crate turns the SNS notifications CloudWatch publishes on alarm state
//! changes into Slack attachment cards and posts them to an incoming webhook.
//! It provides:
//!
//! - [`SnsEnvelope`] - The SNS event delivered to the Lambda function
//! - [`AlarmEvent`] - The alarm, with defaults applied to missing fields
//! - [`build_message`] - The Slack card for an alarm
//! - [`Notifier`] - The handler, generic over a [`WebhookSender`]
//!
//! # Example
//!
//! ```no_run
//! use alarm_notifier::{Notifier, SnsEnvelope};
//! use slack_webhook::SlackClient;
//!
//! # async fn example() -> Result<(), slack_webhook::WebhookError> {
//! let notifier = Notifier::new(SlackClient::new()?);
//!
//! let envelope = SnsEnvelope::from_message(
//!     r#"{"AlarmName":"HighCPU","NewStateValue":"ALARM","NewStateReason":"CPU > 90%"}"#,
//! );
//! let response = notifier.handle(&envelope).await;
//! println!("{}: {}", response.status_code, response.body);
//! # Ok(())
//! # }
//! ```

pub mod alarm;
pub mod envelope;
pub mod error;
pub mod format;
pub mod notifier;
pub mod sender;

pub use alarm::{AlarmEvent, AlarmState, AlarmTrigger, DEFAULT_REGION};
pub use envelope::{SnsEnvelope, SnsNotification, SnsRecord};
pub use error::NotifierError;
pub use format::{build_message, console_url, Severity, StateStyle};
pub use notifier::{HandlerResponse, Notifier};
pub use sender::{LoggingSender, WebhookSender};

/// Initialise `tracing` for the Lambda environment.
///
/// Honors `RUST_LOG` and defaults to `info`. CloudWatch Logs adds its own
/// timestamps and does not render ANSI colors.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
