//! Run the handler once against an SNS event stored on disk.
//!
//! Run with: cargo run -p alarm-notifier --example send_sample -- <event.json>
//!
//! Reads SLACK_WEBHOOK_URL from the environment or a `.env` file. Set
//! ALARM_NOTIFIER_DRY_RUN=1 to log the Slack payload instead of posting it.
//!
//! Examples:
//!   cargo run -p alarm-notifier --example send_sample -- event.json
//!   ALARM_NOTIFIER_DRY_RUN=1 cargo run -p alarm-notifier --example send_sample -- event.json

use std::env;
use std::fs;

use alarm_notifier::{LoggingSender, Notifier, SnsEnvelope};
use slack_webhook::{SlackClient, WebhookConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    alarm_notifier::init_tracing();

    let event_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: send_sample <event.json>");
            std::process::exit(1);
        }
    };

    let event_data = fs::read_to_string(&event_path)?;
    let envelope: SnsEnvelope = serde_json::from_str(&event_data)?;

    let response = if env::var("ALARM_NOTIFIER_DRY_RUN").is_ok() {
        let config = WebhookConfig::from_env_opt()
            .unwrap_or_else(|| WebhookConfig::new("https://hooks.slack.com/services/dry-run"));
        Notifier::new(LoggingSender)
            .handle_with_config(&envelope, Some(config))
            .await
    } else {
        Notifier::new(SlackClient::new()?).handle(&envelope).await
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
