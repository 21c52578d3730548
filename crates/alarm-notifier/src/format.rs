//! Presentation of alarm events as Slack attachment cards.

use slack_webhook::{Attachment, Field, SlackMessage};

use crate::alarm::{AlarmEvent, AlarmState};

/// Description marker for critical alarms.
pub const CRITICAL_MARKER: &str = "🚨 CRITICAL";
/// Description marker for warning alarms.
pub const WARNING_MARKER: &str = "⚠️ WARNING";

const FOOTER: &str = "AWS CloudWatch";
const FOOTER_ICON: &str =
    "https://a0.awsstatic.com/libra-css/images/logos/aws_logo_smile_1200x630.png";

/// Color, emoji and label for an alarm state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStyle {
    pub color: &'static str,
    pub emoji: &'static str,
    pub label: String,
}

impl StateStyle {
    pub fn for_state(state: &AlarmState) -> Self {
        match state {
            AlarmState::Alarm => Self {
                color: "#ff0000",
                emoji: "🚨",
                label: "ALARM".to_string(),
            },
            AlarmState::Ok => Self {
                color: "#36a64f",
                emoji: "✅",
                label: "RESOLVED".to_string(),
            },
            AlarmState::Other(value) => Self {
                color: "#ffcc00",
                emoji: "⚠️",
                label: value.clone(),
            },
        }
    }
}

/// Severity parsed from the alarm description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Substring match on the description markers. Critical wins over warning.
    pub fn from_description(description: Option<&str>) -> Self {
        let description = description.unwrap_or_default();
        if description.contains(CRITICAL_MARKER) {
            Self::Critical
        } else if description.contains(WARNING_MARKER) {
            Self::Warning
        } else {
            Self::Info
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

/// CloudWatch console link for an alarm.
pub fn console_url(region: &str, alarm_name: &str) -> String {
    format!(
        "https://console.aws.amazon.com/cloudwatch/home?region={}#alarmsV2:alarm/{}",
        region, alarm_name
    )
}

/// Build the Slack message for an alarm event.
///
/// `sent_at` is the unix timestamp shown in the card footer.
pub fn build_message(event: &AlarmEvent, sent_at: i64) -> SlackMessage {
    let style = StateStyle::for_state(&event.state);
    let severity = Severity::from_description(event.description.as_deref());

    let mut attachment = Attachment::new(
        style.color,
        format!("{} {} is {}", style.emoji, event.name, style.label),
    )
    .with_title(
        format!("{} {}", style.emoji, event.name),
        console_url(&event.region, &event.name),
    )
    .with_text(event.reason.clone())
    .with_field(Field::short("Status", style.label.clone()))
    .with_field(Field::short("Severity", severity.as_str()))
    .with_field(Field::short("Region", event.region.clone()))
    .with_field(Field::short("Time", event.timestamp.clone()))
    .with_footer(FOOTER, FOOTER_ICON)
    .with_ts(sent_at);

    if let Some(summary) = event.trigger.as_ref().and_then(|t| t.summary()) {
        attachment = attachment.with_field(Field::long("Metric", summary));
    }

    SlackMessage::single(attachment)
}
