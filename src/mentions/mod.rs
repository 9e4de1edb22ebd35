//! Optional Slack mention for the GitHub user named in the message
//!
//! When mentions are enabled and the configured GitHub user appears in the
//! message, the user is looked up in the mapping service and the message is
//! prefixed with `<@SLACK_ID>: `. Every failure falls back to the original
//! message.

pub mod mapping;
pub mod matcher;

pub use mapping::{MAPPING_REQUEST_TIMEOUT, MappingClient, UserMapping};
pub use matcher::contains_github_username;

use tracing::{error, info, warn};

use crate::core::config::NotifyConfig;
use crate::errors::MappingError;

/// Return the configured message, prefixed with a Slack mention when one can
/// be resolved.
pub async fn prepend_slack_mention(
    config: &NotifyConfig,
    mapping: Option<&dyn UserMapping>,
) -> String {
    let message = config.message.clone();

    if config.mapping_endpoint.is_none() {
        info!("GITHUB_SLACK_MAPPING_ENDPOINT not set, skipping mention");
        return message;
    }

    if !config.enable_mentions {
        info!("Slack mentions disabled via ENABLE_SLACK_MENTIONS, skipping mention");
        return message;
    }

    let Some(github_user) = config.github_user.as_deref() else {
        info!("GH_USER empty, skipping mention");
        return message;
    };

    if !contains_github_username(&message, github_user) {
        info!(
            github_user,
            "GitHub username not found in message, skipping mention"
        );
        return message;
    }

    let Some(mapping) = mapping else {
        warn!(github_user, "No mapping client available, skipping mention");
        return message;
    };

    match mapping.fetch_slack_user_id(github_user).await {
        Ok(slack_user_id) => {
            info!(github_user, slack_user_id = %slack_user_id, "Slack ID found");
            format!("<@{slack_user_id}>: {message}")
        }
        Err(MappingError::NotFound(user)) => {
            warn!(
                github_user = %user,
                "GitHub user not found in mapping API, skipping mention"
            );
            message
        }
        Err(e @ MappingError::Transport(_)) => {
            error!(github_user, error = %e, "Failed to fetch Slack user, skipping mention");
            message
        }
    }
}
