//! Slack incoming-webhook client library.
//!
//! This crate provides a small Rust client for posting messages to a Slack
//! incoming webhook. It supports:
//!
//! - Building attachment-style messages (color bar, title, fields, footer)
//! - Reading the webhook URL from the environment
//! - Posting a message and reporting the HTTP status the webhook returned
//!
//! # Example
//!
//! ```no_run
//! use slack_webhook::{Attachment, Field, SlackClient, SlackMessage, WebhookConfig};
//!
//! # async fn example() -> Result<(), slack_webhook::WebhookError> {
//! let config = WebhookConfig::from_env()?;
//! let client = SlackClient::new()?;
//!
//! let attachment = Attachment::new("#36a64f", "Deploy finished")
//!     .with_text("All services healthy")
//!     .with_field(Field::short("Region", "us-east-2"));
//!
//! let status = client.post(&config.url, &SlackMessage::single(attachment)).await?;
//! println!("Webhook answered {}", status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::SlackClient;
pub use config::{WebhookConfig, WEBHOOK_URL_ENV};
pub use error::WebhookError;
pub use types::*;
