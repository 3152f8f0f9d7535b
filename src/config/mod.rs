// src/config/mod.rs
//! Analysis configuration: builder, TOML file and env loading.

pub mod analysis;

pub use analysis::{
    AnalysisConfig, AnalysisConfigBuilder, AnalysisLevel, Language, DEFAULT_CONFIG_PATH,
    ENV_CONFIG_PATH, ENV_MAX_KEYWORDS,
};
