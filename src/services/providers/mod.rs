//! Completion provider abstraction.
//!
//! A trait-based seam over the external chat-completion API so the handler
//! can be exercised against a mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::usage::UsageStats;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Non-success status from the completion API. The body is passed
    /// through verbatim, not reinterpreted.
    #[error("Completion API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Completion contained no message content")]
    EmptyCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Raw completion output plus pass-through token counters.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub content: String,
    pub usage: UsageStats,
}

/// Trait for chat-completion providers. A single best-effort attempt per
/// call; retry policy is the caller's concern (and the service has none).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion, ProviderError>;
}
