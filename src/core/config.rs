use std::env;

use serde::Serialize;

use crate::errors::SlackError;

pub const DEFAULT_COLOR: &str = "#008000";
pub const DEFAULT_OUTPUT_DIR: &str = "/app/outputs";

/// Number of token characters that are safe to show in logs.
const TOKEN_VISIBLE_PREFIX: usize = 8;

/// Invocation parameters, read once from the environment at startup.
///
/// Optional text settings treat an empty variable the same as an unset one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotifyConfig {
    pub color: String,
    pub title: Option<String>,
    pub message: String,
    pub context: Option<String>,

    pub also_send_to_channel: bool,
    pub channel: String,
    pub output_dir: Option<String>,
    pub thread_ts: Option<String>,
    pub update_ts: Option<String>,
    pub delete_ts: Option<String>,
    pub token: String,
    pub github_user: Option<String>,
    pub enable_mentions: bool,
    pub mapping_endpoint: Option<String>,
}

impl NotifyConfig {
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` when a required variable is missing or
    /// a boolean variable cannot be parsed.
    pub fn from_env() -> Result<Self, SlackError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`NotifyConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| {
                SlackError::ConfigError(format!("required key {key} missing value"))
            })
        };
        let flag = |key: &str| match optional(key) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                SlackError::ConfigError(format!("{key}: invalid boolean value {raw:?}"))
            }),
            None => Ok(false),
        };

        Ok(Self {
            // Defaults apply only to unset variables; an explicit empty value is kept.
            color: lookup("SLACK_COLOR").unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            title: optional("SLACK_TITLE"),
            message: optional("SLACK_MESSAGE").unwrap_or_default(),
            context: optional("SLACK_CONTEXT"),
            also_send_to_channel: flag("SLACK_ALSO_SEND_TO_CHANNEL")?,
            channel: required("SLACK_CHANNEL")?,
            // An empty SLACK_OUTPUT_DIR disables result files.
            output_dir: match lookup("SLACK_OUTPUT_DIR") {
                Some(dir) if dir.is_empty() => None,
                Some(dir) => Some(dir),
                None => Some(DEFAULT_OUTPUT_DIR.to_string()),
            },
            thread_ts: optional("SLACK_THREAD_TS"),
            update_ts: optional("SLACK_UPDATE_MESSAGE_TS"),
            delete_ts: optional("SLACK_DELETE_MESSAGE_TS"),
            token: required("SLACK_TOKEN")?,
            github_user: optional("GH_USER"),
            enable_mentions: flag("ENABLE_SLACK_MENTIONS")?,
            mapping_endpoint: optional("GITHUB_SLACK_MAPPING_ENDPOINT"),
        })
    }

    /// Pretty JSON rendering of the config with the token cut to a short prefix.
    #[must_use]
    pub fn redacted(&self) -> String {
        let mut shown = self.clone();
        let prefix: String = shown.token.chars().take(TOKEN_VISIBLE_PREFIX).collect();
        shown.token = format!("{prefix}...");
        serde_json::to_string_pretty(&shown).unwrap_or_else(|_| "<unprintable config>".to_string())
    }
}

/// Accepts the same spellings as Go's `strconv.ParseBool`, which is what
/// existing pipelines already pass in.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
