//! Text chunker coverage and boundary tests.

use synthesis::condense::chunk_text;

#[test]
fn concatenation_reproduces_input() {
    let text = "abcdefghij".repeat(250);
    let chunks = chunk_text(&text, 800);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn no_chunk_exceeds_budget() {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(100);
    for budget in [1, 7, 100, 4096] {
        let chunks = chunk_text(&text, budget);
        assert!(chunks.iter().all(|c| c.chars().count() <= budget));
        assert_eq!(chunks.concat(), text);
    }
}

#[test]
fn last_chunk_may_be_shorter() {
    let text = "a".repeat(25);
    let chunks = chunk_text(&text, 10);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].chars().count(), 10);
    assert_eq!(chunks[1].chars().count(), 10);
    assert_eq!(chunks[2].chars().count(), 5);
}

#[test]
fn exact_multiple_has_no_empty_trailing_chunk() {
    let chunks = chunk_text("aaaa", 2);
    assert_eq!(chunks, vec!["aa", "aa"]);
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert!(chunk_text("", 100).is_empty());
}

#[test]
fn budget_larger_than_input_yields_single_chunk() {
    let chunks = chunk_text("short", 8000);
    assert_eq!(chunks, vec!["short"]);
}

#[test]
fn multibyte_characters_are_never_split() {
    let text = "é漢字🦀".repeat(10);
    let chunks = chunk_text(&text, 3);
    assert_eq!(chunks.concat(), text);
    assert!(chunks.iter().all(|c| c.chars().count() <= 3));
    // Every chunk is valid UTF-8 by construction; check boundaries landed on
    // whole characters by round-tripping through chars.
    for chunk in &chunks {
        assert_eq!(chunk.chars().collect::<String>(), *chunk);
    }
}

#[test]
fn zero_budget_is_treated_as_unbounded() {
    let chunks = chunk_text("whole text", 0);
    assert_eq!(chunks, vec!["whole text"]);
}
