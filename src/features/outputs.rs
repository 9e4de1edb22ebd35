use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::models::SendOutputs;
use crate::errors::SlackError;

pub const CHANNEL_ID_FILE: &str = "channel-id";
pub const MESSAGE_TS_FILE: &str = "message-ts";
pub const THREAD_TS_FILE: &str = "thread-ts";

/// Write the send identifiers to `output_dir` for later workflow steps,
/// one raw value per file.
///
/// - `channel-id`: ID of the channel (updates need the ID, not the name)
/// - `message-ts`: timestamp of the message, root or reply
/// - `thread-ts`: timestamp of the thread's root message
///
/// Files are written in that order and stop at the first failure, so earlier
/// files may already be on disk.
pub fn write_outputs(output_dir: &Path, outputs: &SendOutputs) -> Result<(), SlackError> {
    let files = [
        (CHANNEL_ID_FILE, outputs.channel_id.as_str()),
        (MESSAGE_TS_FILE, outputs.message_ts.as_str()),
        (THREAD_TS_FILE, outputs.thread_ts.as_str()),
    ];

    for (name, value) in files {
        let path = output_dir.join(name);
        fs::write(&path, value).map_err(|e| {
            SlackError::PersistError(format!("{}: {}", path.display(), e))
        })?;
        info!(file = name, value, "{name} written");
    }

    Ok(())
}
