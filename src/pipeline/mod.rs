//! Pipeline orchestrators.
//!
//! Two single-pass state machines built from the persona agent:
//! - [`debate::DebatePipeline`] — strictly sequential, abort on first failure
//! - [`analysis::AnalysisPipeline`] — concurrent fan-out with per-persona
//!   failure isolation
//!
//! The split in failure policy is deliberate: a debate stage feeds the next,
//! so a missing stage makes the rest meaningless; the three analyses are
//! independent value, so losing one should not destroy the other two.

use crate::agent::AgentError;

pub mod analysis;
pub mod debate;

pub use analysis::{AnalysisPipeline, AnalysisResult};
pub use debate::{DebatePipeline, DebateResult};

/// A pipeline failure, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A persona stage failed; the run was aborted.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// Human-readable stage name (e.g. "Critic").
        stage: &'static str,
        /// The underlying agent failure.
        #[source]
        source: AgentError,
    },
}

impl PipelineError {
    /// The name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Stage { stage, .. } => stage,
        }
    }
}
