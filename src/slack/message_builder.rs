//! Builds the attachment payload sent to Slack.
//!
//! Content is one legacy attachment (so the color bar shows) carrying Block
//! Kit blocks for the title, message and context.

use serde_json::{Value, json};

use crate::core::config::NotifyConfig;

/// The text segments and styling of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent {
    pub title: Option<String>,
    pub message: String,
    pub context: Option<String>,
    pub color: String,
}

impl MessageContent {
    /// Content for `config`, using `message` (the possibly mention-prefixed
    /// text) in place of the configured message.
    #[must_use]
    pub fn from_config(config: &NotifyConfig, message: String) -> Self {
        Self {
            title: config.title.clone(),
            message,
            context: config.context.clone(),
            color: config.color.clone(),
        }
    }

    /// Plain-text fallback for notifications: the message, or the title when
    /// there is no message.
    #[must_use]
    pub fn fallback(&self) -> &str {
        if self.message.is_empty() {
            self.title.as_deref().unwrap_or_default()
        } else {
            &self.message
        }
    }
}

fn mrkdwn(text: &str) -> Value {
    json!({
        "type": "mrkdwn",
        "text": text,
    })
}

fn section(text: &str) -> Value {
    json!({
        "type": "section",
        "text": mrkdwn(text),
    })
}

/// Block Kit blocks for the content, skipping empty segments.
#[must_use]
pub fn build_blocks(content: &MessageContent) -> Vec<Value> {
    let mut blocks = Vec::new();

    if let Some(title) = content.title.as_deref().filter(|t| !t.is_empty()) {
        blocks.push(section(&format!("*{title}*")));
    }

    if !content.message.is_empty() {
        blocks.push(section(&content.message));
    }

    if let Some(context) = content.context.as_deref().filter(|c| !c.is_empty()) {
        blocks.push(json!({
            "type": "context",
            "elements": [mrkdwn(context)],
        }));
    }

    blocks
}

/// The single attachment carried by the outgoing message.
#[must_use]
pub fn build_attachment(content: &MessageContent) -> Value {
    json!({
        "fallback": content.fallback(),
        "color": content.color,
        "blocks": build_blocks(content),
    })
}
