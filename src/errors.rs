use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to write output file: {0}")]
    PersistError(String),
}

/// Failure to translate a GitHub username into a Slack user ID.
///
/// `NotFound` is kept apart from every other failure so callers can log an
/// unknown user at a lower severity than a broken mapping service.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("slack user not found in mapping API for {0}")]
    NotFound(String),

    #[error("{0}")]
    Transport(String),
}
