//! Sentence and word segmentation.
//!
//! Deterministic, offline segmentation with no linguistic model behind it.
//! Sentence boundaries are whitespace immediately following a terminal mark
//! (`.`, `!`, `?`). That heuristic mis-splits abbreviations — "Dr. Smith"
//! comes back as two sentences — and is kept that way on purpose rather
//! than patched with hidden special cases.

use std::sync::OnceLock;

use regex::Regex;

fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("hard-coded regex"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("hard-coded regex"))
}

/// Split raw text into sentences, in input order.
///
/// The terminal mark stays with the sentence that precedes it. Results are
/// trimmed of surrounding whitespace; empty pieces are dropped. Text after
/// the last terminal mark is kept as a final sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in boundary_re().find_iter(text) {
        // The terminal mark is a single ASCII byte at the match start.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = boundary.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Split a sentence into purely alphabetic word tokens, in input order.
///
/// Tokens are maximal runs of word characters; any token containing a digit
/// or underscore is discarded entirely rather than trimmed.
pub fn split_words(sentence: &str) -> Vec<String> {
    word_re()
        .find_iter(sentence)
        .map(|token| token.as_str())
        .filter(|token| token.chars().all(char::is_alphabetic))
        .map(str::to_string)
        .collect()
}
