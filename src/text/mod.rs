// src/text/mod.rs
//! Persian text pipeline: normalize, segment, stem.

pub mod normalize;
pub mod segment;
pub mod stem;
pub mod tables;

pub use normalize::normalize;
pub use segment::{tokenize_sentences, tokenize_words, word_boundary_tokens};
pub use stem::Stemmer;

use serde::Serialize;

/// True when `text` holds nothing but whitespace. The information separators
/// U+001C..U+001F count as whitespace here, as they do for most string
/// `strip` routines, although `char::is_whitespace` rejects them.
pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}'))
}

/// Intermediate view of a passage after each preprocessing stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preprocessed {
    pub normalized: String,
    pub sentences: Vec<String>,
    pub words: Vec<String>,
    pub stems: Vec<String>,
}

/// Bundles the text stages behind one handle.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    stemmer: Stemmer,
}

impl Preprocessor {
    pub fn new(stemmer: Stemmer) -> Self {
        Self { stemmer }
    }

    pub fn preprocess(&self, text: &str) -> String {
        normalize(text)
    }

    pub fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        tokenize_sentences(text)
    }

    pub fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        tokenize_words(sentence)
    }

    pub fn stem_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        self.stemmer.stem_words(words)
    }

    /// Run every stage; words are collected across sentences in order.
    pub fn run(&self, text: &str) -> Preprocessed {
        let normalized = normalize(text);
        let sentences = tokenize_sentences(&normalized);
        let words: Vec<String> = sentences.iter().flat_map(|s| tokenize_words(s)).collect();
        let stems = self.stemmer.stem_words(&words);
        Preprocessed {
            normalized,
            sentences,
            words,
            stems,
        }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(Stemmer::shared())
    }
}
