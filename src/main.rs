use anyhow::Context;
use slack_notify::core::config::NotifyConfig;
use slack_notify::mentions::MappingClient;
use slack_notify::slack::SlackClient;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    slack_notify::setup_logging();

    let config = NotifyConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;
    info!(config = %config.redacted(), "Config loaded");

    let slack = SlackClient::new(config.token.clone());
    let mapping = config
        .mapping_endpoint
        .clone()
        .map(MappingClient::new)
        .transpose()
        .context("Failed to build mapping client")?;

    slack_notify::notify(
        &config,
        &slack,
        mapping.as_ref().map(|m| m as &dyn slack_notify::mentions::UserMapping),
    )
    .await
    .context("Failed to send Slack message")?;

    Ok(())
}
