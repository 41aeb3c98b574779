use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::chat::{ChatPrompt, ChatReply, TokenUsage, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

pub use quizgen_core::{GenerationRequest, QuizResult};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    pub model: Option<String>,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: Option<f32>,
    #[validate(range(min = 1))]
    pub max_tokens: Option<u32>,
}

impl From<ChatRequest> for ChatPrompt {
    fn from(request: ChatRequest) -> Self {
        Self {
            prompt: request.prompt,
            model: request.model,
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    pub model: String,
    pub usage: Option<TokenUsage>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.content,
            model: reply.model,
            usage: reply.usage,
        }
    }
}

// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}
