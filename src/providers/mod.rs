//! LLM chat client abstraction layer.
//!
//! Defines the [`ChatClient`] trait and the shared request types used by
//! every pipeline stage. One real implementation exists —
//! [`ollama::OllamaClient`] for the Ollama `/api/chat` API — and the trait
//! is the seam where tests substitute scripted stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod ollama;

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// Sampling parameters controlling output randomness for one call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Softmax temperature, 0.0–1.0.
    pub temperature: f32,
    /// Nucleus sampling cutoff, 0.0–1.0.
    pub top_p: f32,
}

/// A request to the chat service for a single completion.
///
/// The system prompt carries the persona's behavioral contract; the user
/// content may be a composite of prior-stage outputs built by the caller.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// System prompt, injected as the first message when present.
    pub system: Option<String>,
    /// User message content.
    pub user: String,
    /// Sampling configuration for this call.
    pub options: SamplingOptions,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by the chat service client.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP transport failure (connection refused, timeout).
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response did not match the expected schema.
    #[error("chat response parse error: {0}")]
    Parse(String),
    /// Upstream service responded with an error status.
    #[error("chat service returned non-success status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },
    /// Service cannot satisfy the request with current configuration.
    #[error("chat service unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Check HTTP response status and return body text or a structured error.
///
/// # Errors
///
/// Returns `ProviderError::Request` on transport failure,
/// `ProviderError::HttpStatus` on non-2xx.
pub async fn check_http_response(response: reqwest::Response) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            status: status.as_u16(),
            body: truncate_error_body(&body),
        });
    }
    Ok(body)
}

/// Collapse whitespace and cap the length of an HTTP error body so it can
/// be embedded in an error message shown to an operator.
fn truncate_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    const MAX_ERROR_BODY_CHARS: usize = 256;
    if collapsed.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened = collapsed
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect::<String>();
        return format!("{shortened}...[truncated]");
    }

    collapsed
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Core chat service interface.
///
/// Implementations must be `Send + Sync` so pipelines can fan calls out
/// across Tokio task boundaries.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Request a single text completion. No internal retries.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport, service, or parse failure.
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError>;

    /// The model identifier this client is configured for.
    fn model_id(&self) -> &str;
}
