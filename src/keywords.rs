// src/keywords.rs
//! Heuristic keyword ranking for a single passage.
//!
//! There is no corpus to draw document frequencies from, so relevance is
//!   score(w) = tf(w) * min(len(w) / 10, 1) * 1 / (1 + tf(w) * 10)
//! i.e. longer words gain up to a cap and very frequent words are damped.
//! Words listed in the polarity lexicon are then doubled. Ties keep the
//! order in which words first appeared.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::lexicon::{Lexicon, Resources};
use crate::text::tables::is_stop_word;
use crate::text::{is_blank, word_boundary_tokens};

pub const MIN_KEYWORD_LEN: usize = 2;
pub const LENGTH_CAP: f64 = 10.0;
pub const FREQUENCY_DAMPING: f64 = 10.0;
pub const LEXICON_BOOST: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct KeywordRanker {
    lexicon: Arc<Lexicon>,
}

impl KeywordRanker {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn shared() -> Self {
        Self::new(Resources::shared().lexicon.clone())
    }

    /// Up to `max_keywords` words, best first. Blank text or a zero limit
    /// yields nothing.
    pub fn extract(&self, text: &str, max_keywords: usize) -> Vec<String> {
        if is_blank(text) || max_keywords == 0 {
            return Vec::new();
        }
        let scores = self.apply_lexicon_boost(self.term_scores(text));
        top_keywords(scores, max_keywords)
    }

    /// Pre-boost relevance per distinct word, in first-seen order.
    pub fn term_scores(&self, text: &str) -> Vec<(String, f64)> {
        term_scores_from_tokens(&candidate_tokens(text))
    }

    /// Doubles the score of every lexicon-listed word.
    pub fn apply_lexicon_boost(&self, mut scores: Vec<(String, f64)>) -> Vec<(String, f64)> {
        for (word, score) in scores.iter_mut() {
            if self.lexicon.contains(word) {
                *score *= LEXICON_BOOST;
            }
        }
        scores
    }
}

/// Lowercased word tokens minus pure digits and one-character tokens.
pub fn candidate_tokens(text: &str) -> Vec<String> {
    word_boundary_tokens(text)
        .into_iter()
        .filter(|t| !t.chars().all(char::is_numeric))
        .filter(|t| t.chars().count() >= MIN_KEYWORD_LEN)
        .collect()
}

/// `tf` uses the full token count as denominator; stop words and short
/// tokens are counted there but never scored.
pub fn term_scores_from_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, f64)> {
    let total = tokens.len();
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for t in tokens {
        let t = t.as_ref();
        if is_stop_word(t) || t.chars().count() < MIN_KEYWORD_LEN {
            continue;
        }
        match index.get(t) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(t.to_string(), order.len());
                order.push((t.to_string(), 1));
            }
        }
    }

    order
        .into_iter()
        .map(|(word, count)| {
            let tf = count as f64 / total as f64;
            let length_factor = (word.chars().count() as f64 / LENGTH_CAP).min(1.0);
            let damping = 1.0 / (1.0 + tf * FREQUENCY_DAMPING);
            (word, tf * length_factor * damping)
        })
        .collect()
}

/// Stable descending sort, truncated to `k`.
pub fn top_keywords(mut scores: Vec<(String, f64)>, k: usize) -> Vec<String> {
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scores.into_iter().take(k).map(|(w, _)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker() -> KeywordRanker {
        let raw = r#"{"positive_words": {"خوشحال": 0.8}, "negative_words": {"ناراحت": -0.7}}"#;
        KeywordRanker::new(Arc::new(Lexicon::from_json_str(raw, "inline").unwrap()))
    }

    #[test]
    fn stop_words_are_not_scored() {
        let scores = term_scores_from_tokens(&["این", "خوشحال", "است", "کار"]);
        let words: Vec<&str> = scores.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["خوشحال", "کار"]);
        assert!(scores.iter().all(|(_, s)| *s > 0.0));
    }

    #[test]
    fn formula_matches_hand_computation() {
        // 5 tokens, "خوشحال" twice: tf = 0.4, len 6
        let scores = term_scores_from_tokens(&["خوشحال", "خوشحال", "ناراحت", "کار", "مهم"]);
        let expected = 0.4 * 0.6 * (1.0 / (1.0 + 4.0));
        assert!((scores[0].1 - expected).abs() < 1e-12);
    }

    #[test]
    fn boost_only_touches_lexicon_words() {
        let r = ranker();
        let base = vec![
            ("خوشحال".to_string(), 0.5),
            ("کار".to_string(), 0.3),
            ("مهم".to_string(), 0.4),
        ];
        let boosted = r.apply_lexicon_boost(base.clone());
        assert!(boosted[0].1 > base[0].1);
        assert_eq!(boosted[1], base[1]);
        assert_eq!(boosted[2], base[2]);
        assert!(r.apply_lexicon_boost(Vec::new()).is_empty());
    }

    #[test]
    fn top_keywords_orders_and_truncates() {
        let scores = vec![
            ("خوشحال".to_string(), 0.8),
            ("کار".to_string(), 0.5),
            ("مهم".to_string(), 0.6),
            ("امروز".to_string(), 0.3),
        ];
        assert_eq!(top_keywords(scores.clone(), 2), vec!["خوشحال", "مهم"]);
        assert_eq!(top_keywords(scores, 10).len(), 4);
        assert!(top_keywords(Vec::new(), 5).is_empty());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let scores = vec![("الف".to_string(), 0.2), ("ب".to_string(), 0.2)];
        assert_eq!(top_keywords(scores, 2), vec!["الف", "ب"]);
    }

    #[test]
    fn digits_and_blank_text_yield_nothing() {
        let r = ranker();
        assert!(r.extract("", 5).is_empty());
        assert!(r.extract("   ", 5).is_empty());
        assert!(r.extract("کار", 0).is_empty());
        assert_eq!(candidate_tokens("کار 123 مهم"), vec!["کار", "مهم"]);
    }

    #[test]
    fn lexicon_word_leads() {
        let r = ranker();
        let kws = r.extract("امروز خیلی خوشحالم چون کار مهمی تمام کردم خوشحال", 3);
        assert_eq!(kws.len(), 3);
        assert_eq!(kws[0], "خوشحال");
    }
}
