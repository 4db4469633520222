//! Mock provider implementation for testing.

use super::{ChatCompletion, ChatMessage, ChatProvider, ProviderError};
use crate::models::usage::UsageStats;
use async_trait::async_trait;

enum MockBehavior {
    Reply {
        content: String,
        usage: UsageStats,
    },
    Network(String),
    Api {
        status: u16,
        body: String,
    },
}

/// Mock chat provider with a canned reply or a canned failure.
pub struct MockChatProvider {
    behavior: MockBehavior,
}

impl MockChatProvider {
    pub fn replying(content: impl Into<String>) -> Self {
        Self::replying_with_usage(
            content,
            UsageStats {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            },
        )
    }

    pub fn replying_with_usage(content: impl Into<String>, usage: UsageStats) -> Self {
        Self {
            behavior: MockBehavior::Reply {
                content: content.into(),
                usage,
            },
        }
    }

    pub fn unreachable_upstream() -> Self {
        Self {
            behavior: MockBehavior::Network("connection refused".to_string()),
        }
    }

    pub fn upstream_error(status: u16, body: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Api {
                status,
                body: body.into(),
            },
        }
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<ChatCompletion, ProviderError> {
        match &self.behavior {
            MockBehavior::Reply { content, usage } => Ok(ChatCompletion {
                content: content.clone(),
                usage: *usage,
            }),
            MockBehavior::Network(msg) => Err(ProviderError::Network(msg.clone())),
            MockBehavior::Api { status, body } => Err(ProviderError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
