// src/analyzer.rs
//! Analysis entry point.
//! Order:
//! 1) reject blank input
//! 2) normalize
//! 3) lexicon score -> label via the ±0.1 deadband
//! 4) keywords (if enabled)
//! 5) confidence = min(|score|*2, 1) + min(keywords/3, 1)*0.2, capped at 1
//!
//! Confidence blends score magnitude with keyword evidence; it is not a
//! calibrated probability.

use metrics::{counter, histogram};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{LexiMoodError, Result};
use crate::keywords::KeywordRanker;
use crate::lexicon::Resources;
use crate::result::AnalysisResult;
use crate::sentiment::{label_for, SentimentScorer};
use crate::telemetry::{
    anon_hash, ensure_metrics_described, METRIC_ANALYSES, METRIC_INVALID_INPUT, METRIC_KEYWORDS,
};
use crate::text::{is_blank, normalize, Preprocessed, Preprocessor, Stemmer};

pub const CONFIDENCE_SCORE_MULTIPLIER: f64 = 2.0;
pub const KEYWORD_CONFIDENCE_FACTOR: f64 = 0.2;
pub const KEYWORD_COUNT_DIVISOR: f64 = 3.0;

/// Caller-owned pipeline. Cheap to build once resources are loaded.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    preprocessor: Preprocessor,
    scorer: SentimentScorer,
    ranker: KeywordRanker,
}

impl Analyzer {
    /// Pipeline over the process-wide resource cache (loaded on first use).
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_resources(config, Resources::shared())
    }

    pub fn with_resources(config: AnalysisConfig, resources: &Resources) -> Self {
        Self {
            config,
            preprocessor: Preprocessor::new(Stemmer::new(resources.roots.clone())),
            scorer: SentimentScorer::new(resources.lexicon.clone()),
            ranker: KeywordRanker::new(resources.lexicon.clone()),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        ensure_metrics_described();
        if is_blank(text) {
            counter!(METRIC_INVALID_INPUT).increment(1);
            return Err(LexiMoodError::InvalidInput);
        }

        let normalized = normalize(text);
        let score = self.scorer.analyze(&normalized);
        let label = label_for(score);

        let keywords = if self.config.include_keywords() {
            self.ranker.extract(&normalized, self.config.max_keywords())
        } else {
            Vec::new()
        };

        let confidence = confidence(score, keywords.len());

        debug!(
            id = %anon_hash(text),
            label = %label,
            score,
            confidence,
            keywords = keywords.len(),
            "analysis complete"
        );
        counter!(METRIC_ANALYSES, "label" => label.as_str()).increment(1);
        histogram!(METRIC_KEYWORDS).record(keywords.len() as f64);

        AnalysisResult::new(
            label,
            score,
            keywords,
            confidence,
            text,
            self.config.analysis_level().as_str(),
        )
    }

    /// Every preprocessing stage for `text`, including stems.
    pub fn preprocess(&self, text: &str) -> Preprocessed {
        self.preprocessor.run(text)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

pub fn confidence(score: f64, keyword_count: usize) -> f64 {
    let base = (score.abs() * CONFIDENCE_SCORE_MULTIPLIER).min(1.0);
    let keyword_factor =
        (keyword_count as f64 / KEYWORD_COUNT_DIVISOR).min(1.0) * KEYWORD_CONFIDENCE_FACTOR;
    (base + keyword_factor).min(1.0)
}

/// One-shot analysis with `config` over the shared resources.
pub fn analyze_text(text: &str, config: &AnalysisConfig) -> Result<AnalysisResult> {
    Analyzer::new(config.clone()).analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_blend() {
        assert_eq!(confidence(0.0, 0), 0.0);
        assert!((confidence(0.25, 0) - 0.5).abs() < 1e-12);
        assert!((confidence(0.25, 3) - 0.7).abs() < 1e-12);
        assert!((confidence(0.0, 6) - 0.2).abs() < 1e-12);
        assert_eq!(confidence(-0.9, 5), 1.0);
    }

    #[test]
    fn blank_input_is_rejected() {
        let a = Analyzer::with_resources(AnalysisConfig::default(), &Resources::default());
        assert!(matches!(a.analyze(""), Err(LexiMoodError::InvalidInput)));
        assert!(matches!(a.analyze(" \t\n"), Err(LexiMoodError::InvalidInput)));
        assert!(matches!(a.analyze("\u{1C}"), Err(LexiMoodError::InvalidInput)));
        assert!(matches!(a.analyze(" \u{1F}\u{1D} "), Err(LexiMoodError::InvalidInput)));
    }

    #[test]
    fn empty_resources_degrade_to_neutral() {
        let a = Analyzer::with_resources(AnalysisConfig::default(), &Resources::default());
        let r = a.analyze("امروز روز بسیار خوبی بود").unwrap();
        assert_eq!(r.score(), 0.0);
        assert_eq!(r.sentiment(), crate::result::SentimentLabel::Neutral);
    }
}
