// src/lexicon.rs
//! Static linguistic resources: the polarity lexicon and the root dictionary.
//!
//! Both are read from JSON. By default the copies embedded at build time are
//! used; `LEXIMOOD_RESOURCE_DIR` points the loader at a directory holding
//! `sentiment_lexicon.json` and `root_dictionary.json` instead.
//!
//! Lexicon shape:
//! {
//!   "positive_words": { "خوب": 0.7, ... },
//!   "negative_words": { "بد": -0.7, ... }
//! }
//!
//! Root dictionary shape (file order matters, first owning root wins):
//! { "خوشحال": ["خوشحالم", "خوشحالی"], ... }
//!
//! Load failures never propagate out of the default loaders: the mapping
//! comes back empty, a warning is logged, and scoring degrades to neutral.

use metrics::counter;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ResourceError;
use crate::telemetry::{ensure_metrics_described, METRIC_RESOURCE_FALLBACK};
use crate::text::normalize;

pub const ENV_RESOURCE_DIR: &str = "LEXIMOOD_RESOURCE_DIR";
pub const LEXICON_FILE: &str = "sentiment_lexicon.json";
pub const ROOT_DICTIONARY_FILE: &str = "root_dictionary.json";

const EMBEDDED_LEXICON: &str = include_str!("../resources/sentiment_lexicon.json");
const EMBEDDED_ROOT_DICTIONARY: &str = include_str!("../resources/root_dictionary.json");

/// Lookup key for a curated entry: normalized and lowercased, so it matches
/// tokens cut from normalized text.
fn canonical_key(word: &str) -> String {
    normalize(word.trim()).to_lowercase()
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    positive_words: HashMap<String, f64>,
    #[serde(default)]
    negative_words: HashMap<String, f64>,
}

/// Read-only word -> polarity weight mappings.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashMap<String, f64>,
    negative: HashMap<String, f64>,
}

impl Lexicon {
    pub fn from_json_str(raw: &str, name: &str) -> Result<Self, ResourceError> {
        let file: LexiconFile =
            serde_json::from_str(raw).map_err(|source| ResourceError::Parse {
                name: name.to_string(),
                source,
            })?;
        Ok(Self {
            positive: canonical_weights(file.positive_words, name, |w| w > 0.0),
            negative: canonical_weights(file.negative_words, name, |w| w < 0.0),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let raw = read_resource(path)?;
        Self::from_json_str(&raw, &path.display().to_string())
    }

    /// Like [`Lexicon::from_path`] but degrades to an empty lexicon.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::from_path(path).unwrap_or_else(|e| fallback("lexicon", &e))
    }

    /// Embedded lexicon, or the one under `LEXIMOOD_RESOURCE_DIR` when set.
    pub fn load_default() -> Self {
        match resource_dir() {
            Some(dir) => Self::load_or_empty(&dir.join(LEXICON_FILE)),
            None => Self::from_json_str(EMBEDDED_LEXICON, LEXICON_FILE)
                .unwrap_or_else(|e| fallback("lexicon", &e)),
        }
    }

    pub fn positive_weight(&self, word: &str) -> Option<f64> {
        self.positive.get(word).copied()
    }

    pub fn negative_weight(&self, word: &str) -> Option<f64> {
        self.negative.get(word).copied()
    }

    /// Positive weight wins over negative when a word is listed in both.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.positive_weight(word)
            .or_else(|| self.negative_weight(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positive.contains_key(word) || self.negative.contains_key(word)
    }

    /// Union of both key sets.
    pub fn sentiment_words(&self) -> HashSet<&str> {
        self.positive
            .keys()
            .chain(self.negative.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

fn canonical_weights(
    raw: HashMap<String, f64>,
    name: &str,
    sign_ok: impl Fn(f64) -> bool,
) -> HashMap<String, f64> {
    let mut out = HashMap::with_capacity(raw.len());
    for (word, weight) in raw {
        if !weight.is_finite() || !sign_ok(weight) {
            warn!(resource = name, %word, weight, "skipping lexicon entry with bad weight");
            continue;
        }
        let key = canonical_key(&word);
        if !key.is_empty() {
            out.insert(key, weight);
        }
    }
    out
}

/// Read-only inflected form -> root mapping.
#[derive(Debug, Clone, Default)]
pub struct RootDictionary {
    forms: HashMap<String, String>,
    roots: usize,
}

impl RootDictionary {
    pub fn from_json_str(raw: &str, name: &str) -> Result<Self, ResourceError> {
        let parse_err = |source| ResourceError::Parse {
            name: name.to_string(),
            source,
        };
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(raw).map_err(parse_err)?;

        let mut forms = HashMap::new();
        let mut roots = 0usize;
        for (root, list) in entries {
            let list: Vec<String> = serde_json::from_value(list).map_err(parse_err)?;
            let root = canonical_key(&root);
            if root.is_empty() {
                continue;
            }
            roots += 1;
            for form in list {
                let form = canonical_key(&form);
                if !form.is_empty() {
                    forms.entry(form).or_insert_with(|| root.clone());
                }
            }
        }
        Ok(Self { forms, roots })
    }

    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let raw = read_resource(path)?;
        Self::from_json_str(&raw, &path.display().to_string())
    }

    pub fn load_or_empty(path: &Path) -> Self {
        Self::from_path(path).unwrap_or_else(|e| fallback("root_dictionary", &e))
    }

    pub fn load_default() -> Self {
        match resource_dir() {
            Some(dir) => Self::load_or_empty(&dir.join(ROOT_DICTIONARY_FILE)),
            None => Self::from_json_str(EMBEDDED_ROOT_DICTIONARY, ROOT_DICTIONARY_FILE)
                .unwrap_or_else(|e| fallback("root_dictionary", &e)),
        }
    }

    /// Root owning `form`, if any.
    pub fn root_of(&self, form: &str) -> Option<&str> {
        self.forms.get(form).map(String::as_str)
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots == 0
    }
}

/// Both resources, shared behind `Arc`s by the scorer, ranker and stemmer.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub lexicon: Arc<Lexicon>,
    pub roots: Arc<RootDictionary>,
}

impl Resources {
    pub fn new(lexicon: Lexicon, roots: RootDictionary) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            roots: Arc::new(roots),
        }
    }

    pub fn load_default() -> Self {
        let res = Self::new(Lexicon::load_default(), RootDictionary::load_default());
        info!(
            positive = res.lexicon.positive_len(),
            negative = res.lexicon.negative_len(),
            roots = res.roots.len(),
            "linguistic resources loaded"
        );
        res
    }

    pub fn from_dir(dir: &Path) -> Self {
        Self::new(
            Lexicon::load_or_empty(&dir.join(LEXICON_FILE)),
            RootDictionary::load_or_empty(&dir.join(ROOT_DICTIONARY_FILE)),
        )
    }

    /// Process-wide cache, loaded on first use. Concurrent first calls
    /// block until the single load finishes.
    pub fn shared() -> &'static Resources {
        static SHARED: OnceCell<Resources> = OnceCell::new();
        SHARED.get_or_init(Resources::load_default)
    }
}

fn resource_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_RESOURCE_DIR).map(PathBuf::from)
}

fn read_resource(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn fallback<T: Default>(resource: &'static str, err: &ResourceError) -> T {
    ensure_metrics_described();
    counter!(METRIC_RESOURCE_FALLBACK, "resource" => resource).increment(1);
    warn!(resource, error = %err, "resource unavailable, using empty mapping");
    T::default()
}
