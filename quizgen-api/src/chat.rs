//! Pass-through to a hosted chat-completion API.
//!
//! The proxy shares nothing with quiz generation. [`ChatCompletion`] is the
//! seam handlers depend on; [`OpenAiChatClient`] is the production
//! implementation.

pub mod client;
pub mod error;

pub use client::{ChatSettings, OpenAiChatClient};
pub use error::ChatError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// A single-turn prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub prompt: String,
    /// Falls back to the client's configured default model.
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub model: String,
    pub usage: Option<TokenUsage>,
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: ChatPrompt) -> Result<ChatReply, ChatError>;
}
