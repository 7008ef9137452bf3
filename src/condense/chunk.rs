//! Character-budget text splitter.
//!
//! Boundaries are purely character-count-based — a chunk may end mid-sentence
//! or mid-term. That is an accepted simplification: the budget is a proxy for
//! a token budget, and sentence-aware splitting is deliberately out of scope.

/// Split `text` into ordered contiguous chunks of at most `budget` characters.
///
/// Concatenating the chunks reproduces the input exactly. The last chunk may
/// be shorter; chunks never overlap and never split a multi-byte character.
/// Empty input yields an empty vec. A zero budget is treated as unbounded
/// (the whole text as one chunk) rather than looping forever.
pub fn chunk_text(text: &str, budget: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if budget == 0 {
        return vec![text.to_owned()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count: usize = 0;

    for ch in text.chars() {
        current.push(ch);
        count = count.saturating_add(1);
        if count == budget {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
