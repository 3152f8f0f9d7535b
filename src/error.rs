// src/error.rs
//! Error types surfaced by the analysis pipeline.
//!
//! Only input and configuration problems reach callers. Resource problems are
//! reported through [`ResourceError`] by the explicit loaders and swallowed
//! (with a warning) by the default ones.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LexiMoodError>;

#[derive(Debug, thiserror::Error)]
pub enum LexiMoodError {
    #[error("text cannot be empty")]
    InvalidInput,

    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// Computed score/confidence left its documented range. Internal defect.
    #[error("{field} must be within its range, got {value}")]
    ResultInvariant { field: &'static str, value: f64 },

    #[error("reading config from {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl LexiMoodError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("reading resource {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing resource {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
