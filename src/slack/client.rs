//! Slack API client module
//!
//! Posts, updates and deletes a single message through the Web API. Calls
//! are made once; a failure is returned to the caller as is.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackTs};
use tracing::debug;

use crate::core::models::{DispatchMode, SendResult};
use crate::errors::SlackError;

pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Response shared by `chat.postMessage`, `chat.update` and `chat.delete`.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    ok: bool,
    channel: Option<String>,
    ts: Option<String>,
    error: Option<String>,
}

/// Delivers one message to Slack according to a [`DispatchMode`].
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the request fails or Slack rejects it.
    async fn send(
        &self,
        channel: &str,
        attachment: &Value,
        mode: &DispatchMode,
    ) -> Result<SendResult, SlackError>;
}

/// Web API method and JSON body for a dispatch.
#[must_use]
pub fn build_chat_request(
    channel: &str,
    attachment: &Value,
    mode: &DispatchMode,
) -> (&'static str, Value) {
    match mode {
        DispatchMode::Send => (
            "chat.postMessage",
            json!({
                "channel": channel,
                "attachments": [attachment],
            }),
        ),
        DispatchMode::ReplyInThread {
            thread_ts,
            broadcast,
        } => {
            let mut payload = json!({
                "channel": channel,
                "attachments": [attachment],
                "thread_ts": thread_ts.0,
            });
            if *broadcast {
                payload["reply_broadcast"] = Value::Bool(true);
            }
            ("chat.postMessage", payload)
        }
        DispatchMode::Update(ts) => (
            "chat.update",
            json!({
                "channel": channel,
                "ts": ts.0,
                "attachments": [attachment],
            }),
        ),
        DispatchMode::Delete(ts) => (
            "chat.delete",
            json!({
                "channel": channel,
                "ts": ts.0,
            }),
        ),
    }
}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    token: SlackApiToken,
    http: Client,
    api_base: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self::with_api_base(token, SLACK_API_BASE)
    }

    /// Client pointed at another API root, e.g. a local mock server.
    #[must_use]
    pub fn with_api_base(token: String, api_base: impl Into<String>) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            http: Client::new(),
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl MessageSender for SlackClient {
    async fn send(
        &self,
        channel: &str,
        attachment: &Value,
        mode: &DispatchMode,
    ) -> Result<SendResult, SlackError> {
        let (api_method, payload) = build_chat_request(channel, attachment, mode);
        debug!(api_method, channel, "Calling Slack API");

        let resp = self
            .http
            .post(format!("{}/{}", self.api_base, api_method))
            .bearer_auth(&self.token.token_value.0)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("{api_method}: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlackError::ApiError(format!(
                "{} HTTP {}",
                api_method,
                resp.status()
            )));
        }

        let body: ChatResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::ApiError(format!("{api_method} JSON parse error: {e}")))?;

        if !body.ok {
            return Err(SlackError::ApiError(format!(
                "{} error: {}",
                api_method,
                body.error.unwrap_or_else(|| "unknown".to_string())
            )));
        }

        Ok(SendResult {
            channel: SlackChannelId(body.channel.unwrap_or_else(|| channel.to_string())),
            ts: SlackTs(body.ts.unwrap_or_default()),
        })
    }
}
