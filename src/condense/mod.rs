//! Document condenser — size-adaptive map-reduce compression.
//!
//! Documents under the threshold pass through verbatim with zero LLM calls.
//! Anything larger is split on a character budget, summarized chunk-by-chunk
//! with bounded concurrency, and rejoined in original chunk order. Ordering
//! matters: later chunks may lean on technical vocabulary introduced earlier.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::config::CondenseConfig;

pub mod chunk;
pub mod summarize;

pub use chunk::chunk_text;
pub use summarize::{ChunkSummarizer, ChunkSummary};

/// Separator between chunk summaries in the condensed output.
pub const SUMMARY_SEPARATOR: &str = "\n\n";

/// The outcome of condensing one document.
#[derive(Debug, Clone)]
pub struct Condensed {
    /// Original text (pass-through) or joined chunk summaries.
    pub text: String,
    /// Whether condensation ran at all.
    pub condensed: bool,
    /// How many chunks used the truncation fallback.
    pub fallback_chunks: usize,
}

/// Drives the chunker and summarizer for documents over the size threshold.
#[derive(Debug, Clone)]
pub struct Condenser {
    summarizer: Arc<ChunkSummarizer>,
    threshold_chars: usize,
    chunk_chars: usize,
    workers: usize,
}

impl Condenser {
    /// Create a condenser from configuration.
    pub fn new(summarizer: ChunkSummarizer, config: &CondenseConfig) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
            threshold_chars: config.threshold_chars,
            chunk_chars: config.chunk_chars,
            workers: config.workers.max(1),
        }
    }

    /// Condense a document.
    ///
    /// Either returns the text unchanged (under threshold, no LLM calls) or
    /// a fully summarized replacement — never a partial mix. Individual chunk
    /// failures are absorbed by the summarizer's truncation fallback, so this
    /// never fails.
    pub async fn condense(&self, text: &str) -> Condensed {
        let total_chars = text.chars().count();
        if total_chars < self.threshold_chars {
            debug!(chars = total_chars, "document under threshold, passing through");
            return Condensed {
                text: text.to_owned(),
                condensed: false,
                fallback_chunks: 0,
            };
        }

        let chunks = chunk_text(text, self.chunk_chars);
        info!(
            chars = total_chars,
            chunks = chunks.len(),
            workers = self.workers,
            "condensing document"
        );

        // Fan out with bounded concurrency; the join below walks handles in
        // spawn order, so the output order is the chunk order regardless of
        // which call completes first.
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut handles = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let summarizer = Arc::clone(&self.summarizer);
            let semaphore = Arc::clone(&semaphore);
            let chunk = chunk.clone();
            handles.push(tokio::spawn(async move {
                match semaphore.acquire_owned().await {
                    Ok(_permit) => summarizer.summarize(&chunk).await,
                    // Semaphore is never closed; degrade rather than panic.
                    Err(_) => summarizer.fallback(&chunk),
                }
            }));
        }

        let mut summaries = Vec::with_capacity(chunks.len());
        let mut fallback_chunks: usize = 0;
        for (handle, chunk) in handles.into_iter().zip(&chunks) {
            let summary = match handle.await {
                Ok(summary) => summary,
                // A lost task degrades the same way a failed call does.
                Err(_) => self.summarizer.fallback(chunk),
            };
            if summary.fell_back {
                fallback_chunks = fallback_chunks.saturating_add(1);
            }
            summaries.push(summary.text);
        }

        info!(fallback_chunks, "document condensed");
        Condensed {
            text: summaries.join(SUMMARY_SEPARATOR),
            condensed: true,
            fallback_chunks,
        }
    }
}
