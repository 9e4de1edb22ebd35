use slack_morphism::SlackTs;

use crate::core::config::NotifyConfig;
use crate::core::models::DispatchMode;
use crate::errors::SlackError;

impl DispatchMode {
    /// Pick the dispatch mode from the configured timestamps.
    ///
    /// Update wins over thread replies, and `also_send_to_channel` only
    /// matters when replying in a thread.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` when both an update and a delete
    /// target are configured.
    pub fn from_config(config: &NotifyConfig) -> Result<Self, SlackError> {
        match (
            config.update_ts.as_deref(),
            config.delete_ts.as_deref(),
            config.thread_ts.as_deref(),
        ) {
            (Some(_), Some(_), _) => Err(SlackError::ConfigError(
                "Cannot update and delete a message at the same time".to_string(),
            )),
            (Some(ts), None, _) => Ok(Self::Update(SlackTs(ts.to_string()))),
            (None, Some(ts), _) => Ok(Self::Delete(SlackTs(ts.to_string()))),
            (None, None, Some(thread_ts)) => Ok(Self::ReplyInThread {
                thread_ts: SlackTs(thread_ts.to_string()),
                broadcast: config.also_send_to_channel,
            }),
            (None, None, None) => Ok(Self::Send),
        }
    }
}
