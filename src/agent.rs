//! Persona agent invoker — one LLM call under one instruction profile.
//!
//! The invoker normalizes failures into [`AgentError`], which names the
//! persona and model so an operator can tell exactly which combination
//! failed (e.g. a model that was never pulled). It never retries and never
//! swallows the underlying cause.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::personas::InstructionProfile;
use crate::providers::{ChatClient, ChatRequest, ProviderError};

/// The trimmed output of one persona invocation.
#[derive(Debug, Clone)]
pub struct AgentResult {
    /// Name of the persona that produced this text.
    pub persona: &'static str,
    /// Trimmed response text.
    pub text: String,
}

/// A persona invocation failure, attributable to one profile and one model.
#[derive(Debug, thiserror::Error)]
#[error("{persona} agent failed (model {model}): {source}; verify the model is pulled and the server is running")]
pub struct AgentError {
    /// Persona that was being invoked.
    pub persona: &'static str,
    /// Configured model identifier.
    pub model: String,
    /// Underlying service failure.
    #[source]
    pub source: ProviderError,
}

/// Invokes personas against a configured chat client.
#[derive(Clone)]
pub struct PersonaAgent {
    client: Arc<dyn ChatClient>,
}

impl PersonaAgent {
    /// Create an invoker over a chat client.
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// The model identifier of the underlying client.
    pub fn model_id(&self) -> &str {
        self.client.model_id()
    }

    /// Invoke one persona with the given user content.
    ///
    /// The user content may be a composite of prior-stage outputs; the
    /// invoker does not inspect it.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] carrying the persona name, model identifier,
    /// and underlying cause on any service failure.
    pub async fn invoke(
        &self,
        profile: &InstructionProfile,
        user_content: &str,
    ) -> Result<AgentResult, AgentError> {
        debug!(
            persona = profile.name,
            content_chars = user_content.chars().count(),
            "invoking persona agent"
        );

        let request = ChatRequest {
            system: Some(profile.system_prompt.to_owned()),
            user: user_content.to_owned(),
            options: profile.sampling,
        };

        match self.client.complete(request).await {
            Ok(text) => Ok(AgentResult {
                persona: profile.name,
                text: text.trim().to_owned(),
            }),
            Err(source) => {
                warn!(persona = profile.name, error = %source, "persona agent call failed");
                Err(AgentError {
                    persona: profile.name,
                    model: self.client.model_id().to_owned(),
                    source,
                })
            }
        }
    }
}

impl std::fmt::Debug for PersonaAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonaAgent")
            .field("model", &self.client.model_id())
            .finish()
    }
}
