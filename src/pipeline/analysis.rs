//! Concurrent three-angle document analysis.
//!
//! Condenses the document first (a pass-through for small inputs), then fans
//! out Explicator, Visionary, and Practitioner against the same condensed
//! text. The three calls share no data, so they run as independent tasks; a
//! failing persona fills its own slot with an error marker instead of
//! sinking the others.

use serde::Serialize;
use tracing::{info, warn};

use crate::agent::{AgentError, PersonaAgent};
use crate::condense::Condenser;
use crate::document::Document;
use crate::personas::{InstructionProfile, EXPLICATOR, PRACTITIONER, VISIONARY};

/// The complete output of one analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// `"success"` (all personas), `"partial"` (some), or `"error"` (none).
    pub status: String,
    /// Plain-language explanation, or an `ERROR:` marker.
    pub explicator: String,
    /// Implications and future directions, or an `ERROR:` marker.
    pub visionary: String,
    /// Actionable practice, or an `ERROR:` marker.
    pub practitioner: String,
    /// Whether the document was condensed before analysis.
    pub condensed: bool,
    /// Chunks that used the truncation fallback during condensation.
    pub fallback_chunks: usize,
    /// Model identifier that served the persona calls.
    pub model: String,
}

/// Orchestrates condensation plus the three-way persona fan-out.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    agent: PersonaAgent,
    condenser: Condenser,
}

impl AnalysisPipeline {
    /// Create an analysis pipeline over a persona agent and condenser.
    pub fn new(agent: PersonaAgent, condenser: Condenser) -> Self {
        Self { agent, condenser }
    }

    /// Run the full analysis over a document.
    ///
    /// Never fails outright: per-persona failures are captured in their
    /// slots and reflected in `status`.
    pub async fn run(&self, document: &Document) -> AnalysisResult {
        info!(origin = %document.origin, "analysis pipeline: condensing document");
        let condensed = self.condenser.condense(&document.text).await;

        info!(
            condensed = condensed.condensed,
            "analysis pipeline: invoking personas"
        );
        let explicator = self.spawn_persona(&EXPLICATOR, &condensed.text);
        let visionary = self.spawn_persona(&VISIONARY, &condensed.text);
        let practitioner = self.spawn_persona(&PRACTITIONER, &condensed.text);
        let (explicator, visionary, practitioner) =
            tokio::join!(explicator, visionary, practitioner);

        let slots = [&explicator, &visionary, &practitioner];
        let succeeded = slots.iter().filter(|s| s.is_ok()).count();
        let status = match succeeded {
            3 => "success",
            0 => "error",
            _ => "partial",
        };

        info!(status, "analysis pipeline: complete");
        AnalysisResult {
            status: status.to_owned(),
            explicator: slot_text(explicator),
            visionary: slot_text(visionary),
            practitioner: slot_text(practitioner),
            condensed: condensed.condensed,
            fallback_chunks: condensed.fallback_chunks,
            model: self.agent.model_id().to_owned(),
        }
    }

    /// Run one persona as an independent task so a slow or failing call
    /// cannot serialize the fan-out.
    async fn spawn_persona(
        &self,
        profile: &'static InstructionProfile,
        text: &str,
    ) -> Result<String, AgentError> {
        let agent = self.agent.clone();
        let text = text.to_owned();
        let handle =
            tokio::spawn(async move { agent.invoke(profile, &text).await.map(|r| r.text) });
        match handle.await {
            Ok(result) => result,
            Err(join_error) => {
                warn!(persona = profile.name, error = %join_error, "persona task lost");
                // A lost task reports as unavailable rather than panicking
                // the whole analysis.
                Err(AgentError {
                    persona: profile.name,
                    model: self.agent.model_id().to_owned(),
                    source: crate::providers::ProviderError::Unavailable(format!(
                        "persona task aborted: {join_error}"
                    )),
                })
            }
        }
    }
}

/// Render a persona slot: output text on success, an explicit marker on
/// failure so the caller can always tell which slot is real analysis.
fn slot_text(slot: Result<String, AgentError>) -> String {
    match slot {
        Ok(text) => text,
        Err(e) => format!("ERROR: {e}"),
    }
}
