//! `OpenAI`-compatible chat completion adapter.

use crate::extraction::ports::{
    CompletionClient, CompletionError, CompletionPrompt, CompletionResult,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const API_KEY_VAR: &str = "OPENAI_API_KEY";
const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
const MODEL_VAR: &str = "OPENAI_MODEL";

/// Characters of an error response body kept in [`CompletionError::Http`].
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Connection settings for [`OpenAiCompletionClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    /// Bearer token; `None` makes every call fail with
    /// [`CompletionError::MissingCredentials`].
    pub api_key: Option<String>,
    /// API root without a trailing slash.
    pub base_url: String,
    /// Chat model name.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_tokens: u32,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            temperature: 0.3,
            max_tokens: 500,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl OpenAiConfig {
    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, ignoring blank values.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskwright::extraction::adapters::openai::OpenAiConfig;
    ///
    /// let config = OpenAiConfig::from_lookup(|key| {
    ///     (key == "OPENAI_MODEL").then(|| "gpt-4o-mini".to_owned())
    /// });
    /// assert_eq!(config.model, "gpt-4o-mini");
    /// assert!(config.api_key.is_none());
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            api_key: read(API_KEY_VAR),
            base_url: read(BASE_URL_VAR)
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_owned()),
            model: read(MODEL_VAR).unwrap_or(defaults.model),
            ..defaults
        }
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Chat completion client for `OpenAI`-compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiCompletionClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiCompletionClient {
    /// Creates a client from explicit settings.
    #[must_use]
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a client from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(OpenAiConfig::from_env())
    }

    /// Returns `true` when an API key is configured.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn build_request<'a>(&'a self, prompt: &'a CompletionPrompt) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &CompletionPrompt) -> CompletionResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredentials)?;

        tracing::debug!(model = %self.config.model, "sending chat completion request");
        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .timeout(self.config.request_timeout)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            tracing::debug!(status = status.as_u16(), "chat completion request rejected");
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(map_send_error)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(CompletionError::EmptyResponse)
    }
}

fn map_send_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::transport(err)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
