// src/telemetry.rs
//! Logging/metrics helpers shared across the pipeline.
//!
//! The library only emits `tracing` events and `metrics` series; installing a
//! subscriber or a recorder is left to the embedding binary.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

pub const METRIC_ANALYSES: &str = "leximood_analyses_total";
pub const METRIC_INVALID_INPUT: &str = "leximood_invalid_input_total";
pub const METRIC_RESOURCE_FALLBACK: &str = "leximood_resource_fallback_total";
pub const METRIC_KEYWORDS: &str = "leximood_keywords_per_analysis";

pub const ENV_DEV_LOG: &str = "LEXIMOOD_DEV_LOG";

/// One-time metrics registration (so series show up once a recorder exists).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(METRIC_ANALYSES, "Completed analyses by sentiment label.");
        describe_counter!(METRIC_INVALID_INPUT, "Analyses rejected for blank input.");
        describe_counter!(
            METRIC_RESOURCE_FALLBACK,
            "Static resources replaced by empty mappings after a load failure."
        );
        describe_histogram!(METRIC_KEYWORDS, "Keywords returned per analysis.");
    });
}

/// Dev logging gate: LEXIMOOD_DEV_LOG=1 or a debug build.
pub fn dev_logging_enabled() -> bool {
    cfg!(debug_assertions) || std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1")
}

/// Short stable id for a passage, so logs never carry raw text.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("امروز روز خوبی است");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("امروز روز خوبی است"));
        assert_ne!(a, anon_hash("امروز روز بدی است"));
    }
}
