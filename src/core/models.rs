use slack_morphism::{SlackChannelId, SlackTs};

/// How the outgoing Slack call is directed. Exactly one applies per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchMode {
    /// Post a new root message.
    Send,
    /// Replace the message at this timestamp.
    Update(SlackTs),
    /// Delete the message at this timestamp.
    Delete(SlackTs),
    /// Reply under this thread root, optionally also posting to the channel.
    ReplyInThread { thread_ts: SlackTs, broadcast: bool },
}

/// Identifiers Slack returns for the message that was sent, updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub channel: SlackChannelId,
    pub ts: SlackTs,
}

/// Values handed to downstream steps as flat files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutputs {
    pub channel_id: String,
    pub message_ts: String,
    pub thread_ts: String,
}

impl SendOutputs {
    /// The thread ts is the root of the conversation: the configured thread
    /// when replying, otherwise the message just sent.
    #[must_use]
    pub fn from_send(result: &SendResult, configured_thread_ts: Option<&str>) -> Self {
        let message_ts = result.ts.0.clone();
        let thread_ts = configured_thread_ts
            .map_or_else(|| message_ts.clone(), std::string::ToString::to_string);

        Self {
            channel_id: result.channel.0.clone(),
            message_ts,
            thread_ts,
        }
    }
}
