//! All Slack-specific functionality

pub mod client;
pub mod message_builder;

// Re-export main types for convenience
pub use client::{MessageSender, SLACK_API_BASE, SlackClient, build_chat_request};
pub use message_builder::{MessageContent, build_attachment, build_blocks};
