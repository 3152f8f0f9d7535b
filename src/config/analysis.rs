// src/config/analysis.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{LexiMoodError, Result};

pub const DEFAULT_MAX_KEYWORDS: usize = 5;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

pub const DEFAULT_CONFIG_PATH: &str = "config/leximood.toml";
pub const ENV_CONFIG_PATH: &str = "LEXIMOOD_CONFIG_PATH";
pub const ENV_MAX_KEYWORDS: &str = "LEXIMOOD_MAX_KEYWORDS";

/// Reported back in results; does not change the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisLevel {
    #[default]
    Sentence,
    Document,
}

impl AnalysisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisLevel::Sentence => "sentence",
            AnalysisLevel::Document => "document",
        }
    }
}

impl fmt::Display for AnalysisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisLevel {
    type Err = LexiMoodError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentence" => Ok(AnalysisLevel::Sentence),
            "document" => Ok(AnalysisLevel::Document),
            other => Err(LexiMoodError::invalid_config(
                "analysis_level",
                format!("must be sentence or document, got {other:?}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Persian,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Persian => "persian",
        }
    }
}

impl FromStr for Language {
    type Err = LexiMoodError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "persian" | "fa" => Ok(Language::Persian),
            other => Err(LexiMoodError::invalid_config(
                "language",
                format!("only persian is supported, got {other:?}"),
            )),
        }
    }
}

/// Validated analysis settings. Only obtainable through `Default`, the
/// builder, or the file/env loaders, all of which validate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    analysis_level: AnalysisLevel,
    language: Language,
    include_keywords: bool,
    max_keywords: usize,
    /// Reserved for callers; not consulted by scoring.
    confidence_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            analysis_level: AnalysisLevel::Sentence,
            language: Language::Persian,
            include_keywords: true,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    pub fn analysis_level(&self) -> AnalysisLevel {
        self.analysis_level
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn include_keywords(&self) -> bool {
        self.include_keywords
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Start a builder from this config's values.
    pub fn to_builder(&self) -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            analysis_level: self.analysis_level,
            language: self.language,
            include_keywords: self.include_keywords,
            max_keywords: self.max_keywords as i64,
            confidence_threshold: self.confidence_threshold,
        }
    }

    /// Parse the `[analysis]` table of a TOML document. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s)?;
        let a = file.analysis;
        let mut b = Self::builder();
        if let Some(level) = a.level {
            b = b.analysis_level(level);
        }
        if let Some(language) = a.language {
            b = b.language(language);
        }
        if let Some(on) = a.include_keywords {
            b = b.include_keywords(on);
        }
        if let Some(n) = a.max_keywords {
            b = b.max_keywords(n);
        }
        if let Some(t) = a.confidence_threshold {
            b = b.confidence_threshold(t);
        }
        b.build()
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| LexiMoodError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&data)
    }

    /// Load using env var + fallbacks:
    /// 1) $LEXIMOOD_CONFIG_PATH (must exist)
    /// 2) config/leximood.toml
    /// 3) defaults
    ///
    /// then apply $LEXIMOOD_MAX_KEYWORDS if set.
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(LexiMoodError::ConfigIo {
                        source: std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "LEXIMOOD_CONFIG_PATH points to non-existent path",
                        ),
                        path: pb,
                    });
                }
                Self::from_toml_file(&pb)?
            }
            Err(_) => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_toml_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        match std::env::var(ENV_MAX_KEYWORDS) {
            Ok(raw) => {
                let n = raw.trim().parse::<i64>().map_err(|_| {
                    LexiMoodError::invalid_config(
                        "max_keywords",
                        format!("{ENV_MAX_KEYWORDS} is not an integer: {raw:?}"),
                    )
                })?;
                base.to_builder().max_keywords(n).build()
            }
            Err(_) => Ok(base),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    analysis: AnalysisSection,
}

#[derive(Debug, Default, Deserialize)]
struct AnalysisSection {
    level: Option<AnalysisLevel>,
    language: Option<Language>,
    include_keywords: Option<bool>,
    max_keywords: Option<i64>,
    confidence_threshold: Option<f64>,
}

/// Collects raw values; `build` rejects anything out of range.
#[derive(Debug, Clone)]
pub struct AnalysisConfigBuilder {
    analysis_level: AnalysisLevel,
    language: Language,
    include_keywords: bool,
    max_keywords: i64,
    confidence_threshold: f64,
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        AnalysisConfig::default().to_builder()
    }
}

impl AnalysisConfigBuilder {
    pub fn analysis_level(mut self, level: AnalysisLevel) -> Self {
        self.analysis_level = level;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn include_keywords(mut self, on: bool) -> Self {
        self.include_keywords = on;
        self
    }

    /// Signed so that negative inputs reach validation instead of wrapping.
    pub fn max_keywords(mut self, n: i64) -> Self {
        self.max_keywords = n;
        self
    }

    pub fn confidence_threshold(mut self, t: f64) -> Self {
        self.confidence_threshold = t;
        self
    }

    pub fn build(self) -> Result<AnalysisConfig> {
        if self.max_keywords < 1 {
            return Err(LexiMoodError::invalid_config(
                "max_keywords",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(LexiMoodError::invalid_config(
                "confidence_threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        let max_keywords = usize::try_from(self.max_keywords)
            .map_err(|_| LexiMoodError::invalid_config("max_keywords", "is too large"))?;
        Ok(AnalysisConfig {
            analysis_level: self.analysis_level,
            language: self.language,
            include_keywords: self.include_keywords,
            max_keywords,
            confidence_threshold: self.confidence_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = AnalysisConfig::default();
        assert_eq!(c.analysis_level(), AnalysisLevel::Sentence);
        assert_eq!(c.language(), Language::Persian);
        assert!(c.include_keywords());
        assert_eq!(c.max_keywords(), 5);
        assert_eq!(c.confidence_threshold(), 0.5);
    }

    #[test]
    fn builder_rejects_out_of_range() {
        for n in [0, -1] {
            let err = AnalysisConfig::builder().max_keywords(n).build().unwrap_err();
            assert!(err.to_string().contains("max_keywords must be at least 1"));
        }
        for t in [1.5, -0.1, f64::NAN] {
            let err = AnalysisConfig::builder()
                .confidence_threshold(t)
                .build()
                .unwrap_err();
            assert!(err
                .to_string()
                .contains("confidence_threshold must be between 0.0 and 1.0"));
        }
    }

    #[test]
    fn toml_partial_keys() {
        let c = AnalysisConfig::from_toml_str(
            r#"
            [analysis]
            level = "document"
            max_keywords = 10
            "#,
        )
        .unwrap();
        assert_eq!(c.analysis_level(), AnalysisLevel::Document);
        assert_eq!(c.max_keywords(), 10);
        assert!(c.include_keywords());
        assert_eq!(AnalysisConfig::from_toml_str("").unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn toml_values_are_validated() {
        let err = AnalysisConfig::from_toml_str("[analysis]\nconfidence_threshold = 2.0").unwrap_err();
        assert!(matches!(err, LexiMoodError::InvalidConfiguration { .. }));
        let err = AnalysisConfig::from_toml_str("[analysis]\nlanguage = \"english\"").unwrap_err();
        assert!(matches!(err, LexiMoodError::ConfigParse(_)));
    }

    #[test]
    fn level_and_language_parse() {
        assert_eq!("Document".parse::<AnalysisLevel>().unwrap(), AnalysisLevel::Document);
        assert!("paragraph".parse::<AnalysisLevel>().is_err());
        assert_eq!("fa".parse::<Language>().unwrap(), Language::Persian);
        assert!("english".parse::<Language>().is_err());
    }
}
