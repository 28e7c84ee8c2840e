//! Content-word extraction from a free-text need.

use regex::Regex;
use std::sync::LazyLock;

/// Words dropped from the extracted keyword list.
///
/// Most entries are shorter than the minimum token length and can never
/// match; they are kept so the list reads as the full set of filler words.
pub const STOP_WORDS: &[&str] = &[
    "el",
    "la",
    "los",
    "las",
    "un",
    "una",
    "de",
    "del",
    "en",
    "con",
    "para",
    "por",
    "que",
    "y",
    "o",
    "a",
    "se",
    "son",
    "es",
    "esta",
    "esto",
    "necesitamos",
    "necesito",
    "queremos",
];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-záéíóúñ]{4,}\b").expect("static keyword regex"));

/// Extract candidate keywords from `text`.
///
/// Lowercases the input, keeps every whole word of four or more letters from
/// the Spanish alphabet, and drops [`STOP_WORDS`]. Words come back in order
/// of appearance and repeats are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
