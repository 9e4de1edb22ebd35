use std::path::Path;

use tracing::info;

use crate::core::config::NotifyConfig;
use crate::core::models::{DispatchMode, SendOutputs};
use crate::errors::SlackError;
use crate::features::outputs::write_outputs;
use crate::mentions::{UserMapping, prepend_slack_mention};
use crate::slack::{MessageContent, MessageSender, build_attachment};

/// Run one notification: validate the dispatch, add the mention, send,
/// then persist the resulting identifiers.
///
/// # Errors
///
/// Returns `SlackError::ConfigError` before any network call when the
/// dispatch settings conflict, and propagates send and persist failures.
pub async fn notify(
    config: &NotifyConfig,
    sender: &dyn MessageSender,
    mapping: Option<&dyn UserMapping>,
) -> Result<SendOutputs, SlackError> {
    let mode = DispatchMode::from_config(config)?;

    let message = prepend_slack_mention(config, mapping).await;
    let content = MessageContent::from_config(config, message);
    let attachment = build_attachment(&content);

    info!(channel = %config.channel, mode = ?mode, "Sending Slack message");
    let result = sender.send(&config.channel, &attachment, &mode).await?;

    let outputs = SendOutputs::from_send(&result, config.thread_ts.as_deref());
    info!(
        channel_id = %outputs.channel_id,
        message_ts = %outputs.message_ts,
        thread_ts = %outputs.thread_ts,
        "Slack message sent"
    );

    match config.output_dir.as_deref() {
        Some(dir) => write_outputs(Path::new(dir), &outputs)?,
        None => info!("SLACK_OUTPUT_DIR not set, skipping output files"),
    }

    Ok(outputs)
}
