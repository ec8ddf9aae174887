//! # OpenRouter Completion Client
//!
//! [`CompletionClient`] backed by the OpenRouter chat-completions API.
//! Configuration comes from the environment so deployments can swap
//! models without a rebuild.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use async_trait::async_trait;

use crate::client::{CompletionClient, CompletionError, CompletionRequest};

/// Default request timeout. A slow completion is treated the same as an
/// unavailable service; the caller falls back either way.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_MODEL: &str = "google/gemini-pro";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Connection settings for the OpenRouter API.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Bearer token for the API.
    pub api_key: String,
    /// Model identifier (e.g. `google/gemini-pro`).
    pub model: String,
    /// API base URL, no trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl OpenRouterConfig {
    /// Build a config from `OPENROUTER_API_KEY`, `OPENROUTER_MODEL`, and
    /// `OPENROUTER_BASE_URL`. Returns `None` when no API key is set, in
    /// which case callers should run template-only.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self {
            api_key,
            model: std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// HTTP client for the OpenRouter chat-completions endpoint.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Build a client with the request timeout baked in.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Http` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: OpenRouterConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            config: OpenRouterConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_prompt},
            ],
            "max_tokens": request.max_tokens,
            "temperature": 0.3,
            "top_p": 0.9,
        });

        debug!(url = %url, model = %self.config.model, "requesting completion");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: ChatResponse = response.json().await?;
        let content = decoded
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Malformed("response carried no choices".to_string()))?;

        Ok(content.trim().to_string())
    }
}
