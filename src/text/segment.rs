// src/text/segment.rs
//! Sentence and word segmentation for normalized Persian text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tables::{is_stop_word, SENTENCE_TERMINATORS, WORD_EDGE_PUNCTUATION};

static RE_TERMINATOR: Lazy<Regex> = Lazy::new(|| {
    let class: String = SENTENCE_TERMINATORS
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Regex::new(&format!("[{class}]")).expect("terminator regex")
});

/// Split into sentences, each keeping its terminator.
///
/// Terminated pieces of two characters or fewer (after trimming) are dropped;
/// a trailing unterminated fragment is kept when non-empty.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut last = 0usize;
    for m in RE_TERMINATOR.find_iter(text) {
        let piece = text[last..m.end()].trim();
        last = m.end();
        if piece.chars().count() > 2 {
            out.push(piece.to_string());
        }
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }
    out
}

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w+\b").expect("word regex"));

/// Plain word-boundary tokens, lowercased. No stop-word filtering.
pub fn word_boundary_tokens(text: &str) -> Vec<String> {
    RE_WORD
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split a sentence into content words: whitespace split, edge punctuation
/// trimmed, empties and stop words dropped.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|piece| piece.trim_matches(WORD_EDGE_PUNCTUATION))
        .filter(|w| !w.is_empty() && !is_stop_word(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_terminators() {
        let s = tokenize_sentences("سلام! چطوری؟ خوبی. بله، ممنون.");
        assert_eq!(s, vec!["سلام!", "چطوری؟", "خوبی.", "بله، ممنون."]);
    }

    #[test]
    fn drops_tiny_pieces_keeps_tail() {
        let s = tokenize_sentences("خوب بود. ! بعد از آن");
        assert_eq!(s, vec!["خوب بود.", "بعد از آن"]);
    }

    #[test]
    fn boundary_tokens_ignore_punctuation() {
        let t = word_boundary_tokens("خوشحال! ناراحت؟ OK.");
        assert_eq!(t, vec!["خوشحال", "ناراحت", "ok"]);
    }

    #[test]
    fn words_skip_stop_words_and_punctuation() {
        let w = tokenize_words("امروز خیلی خوشحالم و راضی هستم!");
        assert_eq!(w, vec!["امروز", "خیلی", "خوشحالم", "راضی"]);
    }
}
