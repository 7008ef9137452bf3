//! Sequential three-stage debate: Optimist → Critic → Realist.
//!
//! Each stage strictly depends on the prior stage's output, so the stages
//! are not parallelizable by construction. Any stage failure aborts the
//! whole run — there is no such thing as a partial debate.

use serde::Serialize;
use tracing::info;

use crate::agent::PersonaAgent;
use crate::extract::first_listed_idea;
use crate::personas::{CRITIC, OPTIMIST, REALIST};

use super::PipelineError;

/// The complete output of one debate run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateResult {
    /// Run status, always `"success"` for a returned result.
    pub status: String,
    /// Full Optimist output (numbered idea list).
    pub optimist: String,
    /// Critic's concerns about the selected idea.
    pub critic: String,
    /// Realist's refined plan.
    pub realist: String,
    /// The single idea carried from Optimist into critique.
    pub idea_to_refine: String,
    /// Model identifier that served all three stages.
    pub model: String,
}

/// Orchestrates the sequential debate.
#[derive(Debug, Clone)]
pub struct DebatePipeline {
    agent: PersonaAgent,
}

impl DebatePipeline {
    /// Create a debate pipeline over a persona agent.
    pub fn new(agent: PersonaAgent) -> Self {
        Self { agent }
    }

    /// Run the full debate over a problem statement.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] naming the failed stage. Later stages are
    /// never invoked after a failure.
    pub async fn run(&self, problem: &str) -> Result<DebateResult, PipelineError> {
        info!("debate pipeline: Optimist stage");
        let optimist = self
            .agent
            .invoke(&OPTIMIST, problem)
            .await
            .map_err(|source| PipelineError::Stage {
                stage: "Optimist",
                source,
            })?;

        let idea_to_refine = first_listed_idea(&optimist.text);

        info!("debate pipeline: Critic stage");
        let critic_prompt =
            format!("Original Problem: {problem}\n\nIdea to Critique:\n{idea_to_refine}");
        let critic = self
            .agent
            .invoke(&CRITIC, &critic_prompt)
            .await
            .map_err(|source| PipelineError::Stage {
                stage: "Critic",
                source,
            })?;

        info!("debate pipeline: Realist stage");
        let realist_prompt = format!(
            "Original Problem: {problem}\n\nOriginal Idea:\n{idea_to_refine}\n\nCritic's Concerns:\n{}",
            critic.text
        );
        let realist = self
            .agent
            .invoke(&REALIST, &realist_prompt)
            .await
            .map_err(|source| PipelineError::Stage {
                stage: "Realist",
                source,
            })?;

        info!("debate pipeline: complete");
        Ok(DebateResult {
            status: "success".to_owned(),
            optimist: optimist.text,
            critic: critic.text,
            realist: realist.text,
            idea_to_refine,
            model: self.agent.model_id().to_owned(),
        })
    }
}
