//! Ollama client implementation using the `/api/chat` API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{check_http_response, ChatClient, ChatRequest, ProviderError};
use crate::config::OllamaConfig;

/// Default Ollama API base URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

// ---------------------------------------------------------------------------
// Wire types (pub for integration testing)
// ---------------------------------------------------------------------------

/// Ollama chat API request body.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct OllamaRequest {
    /// Model name.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<OllamaMessage>,
    /// Disable streaming for non-streaming calls.
    pub stream: bool,
    /// Generation options.
    pub options: OllamaOptions,
}

/// A message in Ollama format.
#[doc(hidden)]
#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaMessage {
    /// Role: "system" or "user".
    pub role: String,
    /// Message content.
    pub content: String,
}

/// Ollama generation options.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct OllamaOptions {
    /// Softmax temperature.
    pub temperature: f32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
}

/// Ollama chat API response body.
///
/// Only the message content is kept; extra keys (model, timings, token
/// counts) are ignored by serde.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct OllamaResponse {
    /// Response message.
    pub message: OllamaResponseMessage,
}

/// The message part of an Ollama response.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct OllamaResponseMessage {
    /// Message content.
    pub content: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Ollama chat API client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// Model name passed to Ollama.
    #[doc(hidden)]
    pub model: String,
    /// Base URL for the Ollama API.
    #[doc(hidden)]
    pub base_url: String,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client from configuration.
    ///
    /// The per-request timeout is applied at the HTTP client level so a hung
    /// server never blocks a pipeline indefinitely.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` if the HTTP client cannot be built.
    pub fn new(config: &OllamaConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("http client build failed: {e}")))?;
        Ok(Self {
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Check whether the Ollama server is reachable.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        self.client.get(&url).send().await.is_ok()
    }
}

// ---------------------------------------------------------------------------
// Request / Response builders (pub for integration testing)
// ---------------------------------------------------------------------------

/// Build an Ollama API request from a chat request.
#[doc(hidden)]
pub fn build_request(model: &str, request: &ChatRequest) -> OllamaRequest {
    let mut messages: Vec<OllamaMessage> = Vec::new();

    // Inject system prompt as a system message if present.
    if let Some(system) = &request.system {
        messages.push(OllamaMessage {
            role: "system".to_owned(),
            content: system.clone(),
        });
    }

    messages.push(OllamaMessage {
        role: "user".to_owned(),
        content: request.user.clone(),
    });

    OllamaRequest {
        model: model.to_owned(),
        messages,
        stream: false,
        options: OllamaOptions {
            temperature: request.options.temperature,
            top_p: request.options.top_p,
        },
    }
}

/// Parse an Ollama API response into completion text.
///
/// # Errors
///
/// Returns `ProviderError::Parse` if the response cannot be deserialized.
#[doc(hidden)]
pub fn parse_response(body: &str) -> Result<String, ProviderError> {
    let resp: OllamaResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(resp.message.content)
}

// ---------------------------------------------------------------------------
// Trait impl
// ---------------------------------------------------------------------------

#[async_trait::async_trait]
impl ChatClient for OllamaClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError> {
        let api_request = build_request(&self.model, &request);

        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&api_request)
            .send()
            .await?;

        let payload = check_http_response(response).await?;
        parse_response(&payload)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
