//! CloudWatch alarm state-change events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::NotifierError;

/// Region used when the alarm does not name one.
pub const DEFAULT_REGION: &str = "us-east-2";

const DEFAULT_ALARM_NAME: &str = "Unknown Alarm";
const DEFAULT_STATE: &str = "UNKNOWN";
const DEFAULT_REASON: &str = "No reason provided";
const FALLBACK_ALARM_NAME: &str = "Unknown";

/// The alarm state after the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmState {
    /// `ALARM`
    Alarm,
    /// `OK`
    Ok,
    /// Anything else, e.g. `INSUFFICIENT_DATA`.
    Other(String),
}

impl AlarmState {
    /// Classify a raw state value. Never fails.
    pub fn parse(value: &str) -> Self {
        match value {
            "ALARM" => Self::Alarm,
            "OK" => Self::Ok,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw state value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alarm => "ALARM",
            Self::Ok => "OK",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for AlarmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The metric condition that tripped the alarm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlarmTrigger {
    pub metric_name: Option<Value>,
    pub threshold: Option<Value>,
}

impl AlarmTrigger {
    /// `"<metric>: <threshold>"` when both parts carry a value.
    ///
    /// Null, false, zero, empty strings and empty collections count as absent.
    pub fn summary(&self) -> Option<String> {
        let metric = self.metric_name.as_ref().filter(|v| is_truthy(v))?;
        let threshold = self.threshold.as_ref().filter(|v| is_truthy(v))?;
        Some(format!("{}: {}", display_value(metric), display_value(threshold)))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The alarm fields of the CloudWatch JSON carried in the SNS message.
#[derive(Debug, Default)]
struct AlarmMessage {
    alarm_name: Option<String>,
    alarm_description: Option<String>,
    new_state_value: Option<String>,
    new_state_reason: Option<String>,
    state_change_time: Option<String>,
    region: Option<String>,
    trigger: Option<AlarmTrigger>,
}

impl AlarmMessage {
    /// Decode a JSON object. Only syntax errors and non-object values fail;
    /// individual fields are read leniently.
    fn decode(raw: &str) -> Result<Self, NotifierError> {
        let object: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self::from_object(&object))
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            alarm_name: text_field(object, "AlarmName"),
            alarm_description: text_field(object, "AlarmDescription"),
            new_state_value: text_field(object, "NewStateValue"),
            new_state_reason: text_field(object, "NewStateReason"),
            state_change_time: text_field(object, "StateChangeTime"),
            region: text_field(object, "Region"),
            trigger: object
                .get("Trigger")
                .and_then(Value::as_object)
                .map(|trigger| AlarmTrigger {
                    metric_name: value_field(trigger, "MetricName"),
                    threshold: value_field(trigger, "Threshold"),
                }),
        }
    }

    /// Stand-in for a message that is not alarm JSON.
    fn fallback(raw: &str) -> Self {
        Self {
            alarm_name: Some(FALLBACK_ALARM_NAME.to_string()),
            new_state_value: Some(DEFAULT_STATE.to_string()),
            new_state_reason: Some(raw.to_string()),
            ..Default::default()
        }
    }
}

// Null counts as missing.
fn value_field(object: &Map<String, Value>, key: &str) -> Option<Value> {
    object.get(key).filter(|v| !v.is_null()).cloned()
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .filter(|v| !v.is_null())
        .map(display_value)
}

/// Naive UTC ISO-8601: no offset, microseconds only when non-zero.
fn iso_timestamp(now: DateTime<Utc>) -> String {
    if now.timestamp_subsec_micros() == 0 {
        now.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// A CloudWatch alarm state change, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmEvent {
    pub name: String,
    pub state: AlarmState,
    pub reason: String,
    /// State change time as sent by CloudWatch, or the receive time.
    pub timestamp: String,
    pub region: String,
    pub description: Option<String>,
    pub trigger: Option<AlarmTrigger>,
}

impl AlarmEvent {
    /// Build an event from an SNS message body.
    ///
    /// Bodies that do not decode as alarm JSON become a synthetic event whose
    /// reason is the raw body. `now` fills in a missing state change time.
    pub fn from_message(raw: &str, now: DateTime<Utc>) -> Self {
        let message = match AlarmMessage::decode(raw) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "SNS message is not alarm JSON, using raw text");
                AlarmMessage::fallback(raw)
            }
        };

        Self::from_parts(message, now)
    }

    fn from_parts(message: AlarmMessage, now: DateTime<Utc>) -> Self {
        Self {
            name: message
                .alarm_name
                .unwrap_or_else(|| DEFAULT_ALARM_NAME.to_string()),
            state: AlarmState::parse(message.new_state_value.as_deref().unwrap_or(DEFAULT_STATE)),
            reason: message
                .new_state_reason
                .unwrap_or_else(|| DEFAULT_REASON.to_string()),
            timestamp: message
                .state_change_time
                .unwrap_or_else(|| iso_timestamp(now)),
            region: message.region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            description: message.alarm_description,
            trigger: message.trigger,
        }
    }
}
