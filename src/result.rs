// src/result.rs
//! Analysis output: label, score, confidence, keywords.
//!
//! The serialized shape is the stable contract toward callers:
//! `{sentiment, score, keywords, confidence, text, analysis_level}`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LexiMoodError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable result of one analysis. Fields are read through accessors only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    sentiment: SentimentLabel,
    score: f64,
    keywords: Vec<String>,
    confidence: f64,
    text: String,
    analysis_level: String,
}

impl AnalysisResult {
    /// Checks `score ∈ [-1,1]` and `confidence ∈ [0,1]`.
    pub fn new(
        sentiment: SentimentLabel,
        score: f64,
        keywords: Vec<String>,
        confidence: f64,
        text: impl Into<String>,
        analysis_level: impl Into<String>,
    ) -> Result<Self> {
        if !(-1.0..=1.0).contains(&score) {
            return Err(LexiMoodError::ResultInvariant {
                field: "score",
                value: score,
            });
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(LexiMoodError::ResultInvariant {
                field: "confidence",
                value: confidence,
            });
        }
        Ok(Self {
            sentiment,
            score,
            keywords,
            confidence,
            text: text.into(),
            analysis_level: analysis_level.into(),
        })
    }

    pub fn sentiment(&self) -> SentimentLabel {
        self.sentiment
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// The original, un-normalized input.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn analysis_level(&self) -> &str {
        &self.analysis_level
    }

    /// Dictionary form of the result.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "sentiment": self.sentiment.as_str(),
            "score": self.score,
            "keywords": self.keywords,
            "confidence": self.confidence,
            "text": self.text,
            "analysis_level": self.analysis_level,
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnalysisResult(sentiment={}, score={:.3}, confidence={:.3})",
            self.sentiment, self.score, self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(score: f64, confidence: f64) -> Result<AnalysisResult> {
        AnalysisResult::new(
            SentimentLabel::Positive,
            score,
            vec!["خوب".into(), "عالی".into()],
            confidence,
            "امروز روز خوبی بود",
            "sentence",
        )
    }

    #[test]
    fn valid_result_keeps_fields() {
        let r = sample(0.8, 0.9).unwrap();
        assert_eq!(r.sentiment(), SentimentLabel::Positive);
        assert_eq!(r.keywords(), ["خوب", "عالی"]);
        assert_eq!(r.text(), "امروز روز خوبی بود");
        assert_eq!(r.analysis_level(), "sentence");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            sample(1.5, 0.5),
            Err(LexiMoodError::ResultInvariant { field: "score", .. })
        ));
        assert!(matches!(
            sample(-1.5, 0.5),
            Err(LexiMoodError::ResultInvariant { field: "score", .. })
        ));
        assert!(matches!(
            sample(0.0, 1.2),
            Err(LexiMoodError::ResultInvariant { field: "confidence", .. })
        ));
        assert!(sample(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn dictionary_and_display_forms() {
        let r = sample(0.8, 0.9).unwrap();
        let v = r.to_value();
        assert_eq!(v["sentiment"], "positive");
        assert_eq!(v["analysis_level"], "sentence");
        assert_eq!(v["keywords"][1], "عالی");
        assert_eq!(
            r.to_string(),
            "AnalysisResult(sentiment=positive, score=0.800, confidence=0.900)"
        );
        assert_eq!(serde_json::to_value(&r).unwrap(), v);
    }
}
