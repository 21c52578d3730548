//! SNS notification envelope as delivered to the Lambda function.

use serde::{Deserialize, Serialize};

/// An SNS event holding one or more records.
///
/// Every field is defaulted so partial test events still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnsEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

/// One record of an SNS event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "EventSource", default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,

    #[serde(rename = "Sns", default)]
    pub sns: SnsNotification,
}

/// The SNS notification inside a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsNotification {
    /// Message body. For CloudWatch alarms this is a JSON document.
    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl SnsEnvelope {
    /// Wrap a single message body, as SNS does for one publish.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            records: vec![SnsRecord {
                event_source: Some("aws:sns".to_string()),
                sns: SnsNotification {
                    message: message.into(),
                    ..Default::default()
                },
            }],
        }
    }

    /// The first record's message body, or `""` when there are no records.
    pub fn first_message(&self) -> &str {
        self.records
            .first()
            .map(|record| record.sns.message.as_str())
            .unwrap_or_default()
    }
}
