//! Message payload types for Slack incoming webhooks.

use serde::{Deserialize, Serialize};

/// Top-level webhook payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    /// Plain message text, shown above any attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Legacy attachments (colored cards).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl SlackMessage {
    /// Create a plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Create a message carrying exactly one attachment.
    pub fn single(attachment: Attachment) -> Self {
        Self {
            attachments: vec![attachment],
            ..Default::default()
        }
    }
}

/// A colored attachment card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Color bar as a hex string (e.g., "#ff0000").
    pub color: String,

    /// Plain-text summary for clients that cannot render attachments.
    pub fallback: String,

    /// Card title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL the title links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,

    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Field grid.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Footer label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Footer icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,

    /// Unix timestamp shown next to the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

impl Attachment {
    /// Create an attachment with a color and fallback text.
    pub fn new(color: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            fallback: fallback.into(),
            ..Default::default()
        }
    }

    /// Set the title and its link.
    pub fn with_title(mut self, title: impl Into<String>, link: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.title_link = Some(link.into());
        self
    }

    /// Set the body text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the footer label and icon.
    pub fn with_footer(mut self, footer: impl Into<String>, icon: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self.footer_icon = Some(icon.into());
        self
    }

    /// Set the footer timestamp (unix seconds).
    pub fn with_ts(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }
}

/// One entry in an attachment's field grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field label.
    pub title: String,
    /// Field value.
    pub value: String,
    /// Whether the field is narrow enough to sit next to another one.
    pub short: bool,
}

impl Field {
    /// A half-width field.
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    /// A full-width field.
    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}
