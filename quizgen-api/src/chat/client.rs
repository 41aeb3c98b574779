//! OpenAI-compatible `chat/completions` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

use super::error::{ChatError, ChatResult};
use super::{ChatCompletion, ChatPrompt, ChatReply, TokenUsage};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for the upstream chat service.
#[derive(Clone, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer credential. `None` leaves the service running but makes every
    /// chat call fail with a configuration error.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl ChatSettings {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for ChatSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatSettings")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    http: Client,
    settings: ChatSettings,
}

impl OpenAiChatClient {
    pub fn new(settings: ChatSettings) -> ChatResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { http, settings })
    }

    pub fn has_credential(&self) -> bool {
        self.settings.api_key.is_some()
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChatClient {
    async fn complete(&self, prompt: ChatPrompt) -> ChatResult<ChatReply> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingCredential)?;

        let model = prompt
            .model
            .as_deref()
            .unwrap_or(&self.settings.default_model);

        let body = CompletionRequest {
            model,
            messages: vec![WireMessage {
                role: "user",
                content: &prompt.prompt,
            }],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        debug!(
            model = %model,
            prompt_chars = prompt.prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Chat completion request failed");
                ChatError::Transport(e)
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Chat service returned an error status");
            return Err(ChatError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&text).map_err(|e| ChatError::Decode(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::EmptyResponse)?;

        Ok(ChatReply {
            content,
            model: parsed.model.unwrap_or_else(|| model.to_string()),
            usage: parsed.usage,
        })
    }
}
