// src/sentiment.rs
//! Lexicon polarity scoring.
//!
//! Tokens are matched raw (no stemming). Each token found in the lexicon
//! contributes its weight; unmatched tokens are left out of both the sum and
//! the count, so the score is the mean weight of the matched words.

use std::sync::Arc;

use crate::lexicon::{Lexicon, Resources};
use crate::result::SentimentLabel;
use crate::text::{is_blank, word_boundary_tokens};

/// Scores above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn shared() -> Self {
        Self::new(Resources::shared().lexicon.clone())
    }

    /// Score normalized text in [-1, 1]; blank text scores 0.
    pub fn analyze(&self, text: &str) -> f64 {
        if is_blank(text) {
            return 0.0;
        }
        self.score_tokens(&word_boundary_tokens(text))
    }

    /// Mean lexicon weight of the matched words.
    pub fn score_tokens<S: AsRef<str>>(&self, words: &[S]) -> f64 {
        let mut sum = 0.0f64;
        let mut matched = 0usize;
        for w in words {
            let w = w.as_ref().to_lowercase();
            if let Some(weight) = self.lexicon.weight(&w) {
                sum += weight;
                matched += 1;
            }
        }
        if matched == 0 {
            return 0.0;
        }
        clamp_score(sum / matched as f64)
    }

    pub fn label(score: f64) -> SentimentLabel {
        label_for(score)
    }
}

/// Deadband labelling: |score| <= 0.1 is neutral.
pub fn label_for(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(-1.0, 1.0)
}
