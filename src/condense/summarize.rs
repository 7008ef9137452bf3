//! Per-chunk summarization with a deterministic truncation fallback.
//!
//! A failed summarization call never propagates: the chunk degrades to a
//! fixed-length prefix of itself with an ellipsis marker, and the summary
//! carries an explicit `fell_back` flag so callers that care can tell the
//! two paths apart without content sniffing.

use tracing::warn;

use crate::agent::PersonaAgent;
use crate::personas::CONDENSER;

/// Marker appended to a truncated fallback chunk.
pub const FALLBACK_ELLIPSIS: &str = " …";

/// The condensed form of one chunk.
#[derive(Debug, Clone)]
pub struct ChunkSummary {
    /// Summary text, or the truncation fallback.
    pub text: String,
    /// True when the LLM call failed and the truncation fallback was used.
    pub fell_back: bool,
}

/// Summarizes single chunks under the fixed condenser profile.
#[derive(Debug, Clone)]
pub struct ChunkSummarizer {
    agent: PersonaAgent,
    fallback_prefix_chars: usize,
}

impl ChunkSummarizer {
    /// Create a summarizer with the given fallback prefix length.
    pub fn new(agent: PersonaAgent, fallback_prefix_chars: usize) -> Self {
        Self {
            agent,
            fallback_prefix_chars,
        }
    }

    /// Summarize one chunk. Never fails: a service error degrades to
    /// [`truncate_fallback`] with `fell_back` set.
    pub async fn summarize(&self, chunk: &str) -> ChunkSummary {
        match self.agent.invoke(&CONDENSER, chunk).await {
            Ok(result) => ChunkSummary {
                text: result.text,
                fell_back: false,
            },
            Err(e) => {
                warn!(error = %e, "chunk summarization failed, using truncation fallback");
                ChunkSummary {
                    text: truncate_fallback(chunk, self.fallback_prefix_chars),
                    fell_back: true,
                }
            }
        }
    }

    /// The fallback for this summarizer's prefix length, without an LLM call.
    ///
    /// Used by the condenser when a summarization task itself is lost
    /// (panicked or cancelled), which degrades the same way a failed call does.
    pub fn fallback(&self, chunk: &str) -> ChunkSummary {
        ChunkSummary {
            text: truncate_fallback(chunk, self.fallback_prefix_chars),
            fell_back: true,
        }
    }
}

/// Deterministic truncation: the first `prefix_chars` characters plus an
/// ellipsis marker. Chunks already within the prefix are returned verbatim.
pub fn truncate_fallback(chunk: &str, prefix_chars: usize) -> String {
    if chunk.chars().count() <= prefix_chars {
        return chunk.to_owned();
    }
    let prefix: String = chunk.chars().take(prefix_chars).collect();
    format!("{prefix}{FALLBACK_ELLIPSIS}")
}
