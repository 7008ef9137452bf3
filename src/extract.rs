//! First-idea extraction from list-formatted LLM output.
//!
//! The Optimist produces several numbered ideas; only the first is carried
//! into critique. That narrowing is intentional — this is not an outline
//! parser and should not grow into one.

use regex::Regex;

/// Extract the first enumerated item from free-form text.
///
/// Looks for a `1.` marker at the start of a line (or after whitespace) and
/// captures up to the next numbered marker or end of text. Fallback chain:
/// the first non-blank line with any leading `1.` prefix stripped, then the
/// whole trimmed text (so empty input yields an empty string).
pub fn first_listed_idea(text: &str) -> String {
    if let Ok(re) = Regex::new(r"(?s)(?:^|\s)1\.\s+(.*?)(?:\n\d\.|$)") {
        if let Some(captures) = re.captures(text) {
            if let Some(idea) = captures.get(1) {
                return idea.as_str().trim().to_owned();
            }
        }
    }

    for line in text.lines() {
        let line = line.trim();
        if !line.is_empty() {
            return line
                .strip_prefix("1.")
                .map_or(line, str::trim_start)
                .to_owned();
        }
    }

    text.trim().to_owned()
}
