// src/lib.rs
//! LexiMood: lexicon-based sentiment analysis and keyword ranking for Persian text.
//!
//! ```no_run
//! use leximood::{AnalysisConfig, Analyzer};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default());
//! let result = analyzer.analyze("امروز روز بسیار خوبی بود و خیلی خوشحالم")?;
//! println!("{result}");
//! # Ok::<(), leximood::LexiMoodError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod result;
pub mod sentiment;
pub mod telemetry;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{analyze_text, Analyzer};
pub use crate::config::{AnalysisConfig, AnalysisConfigBuilder, AnalysisLevel, Language};
pub use crate::error::{LexiMoodError, ResourceError, Result};
pub use crate::keywords::KeywordRanker;
pub use crate::lexicon::{Lexicon, Resources, RootDictionary};
pub use crate::result::{AnalysisResult, SentimentLabel};
pub use crate::sentiment::SentimentScorer;
pub use crate::text::{normalize, Preprocessed, Preprocessor, Stemmer};
