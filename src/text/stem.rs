// src/text/stem.rs
//! Dictionary-then-rules stemmer.
//!
//! Order:
//! 1) root dictionary lookup (first owning root in file order)
//! 2) verb prefix -> verb suffix -> generic suffix -> generic prefix,
//!    each phase stripping at most one affix, longest candidate first
//!
//! An affix strip is accepted only when the remainder keeps at least
//! `MIN_STEM_LEN` characters and carries no joiner. Affixes written with a
//! zero-width non-joiner between them and the stem lose the joiner as well.

use std::sync::Arc;

use super::tables::{
    is_joiner, MIN_STEM_LEN, PREFIXES_LF, SUFFIXES_LF, VERB_PREFIXES_LF, VERB_SUFFIXES_LF, ZWNJ,
};
use crate::lexicon::{Resources, RootDictionary};

#[derive(Clone, Copy, Debug)]
enum Side {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone)]
pub struct Stemmer {
    roots: Arc<RootDictionary>,
}

impl Stemmer {
    pub fn new(roots: Arc<RootDictionary>) -> Self {
        Self { roots }
    }

    /// Stemmer over the process-wide root dictionary.
    pub fn shared() -> Self {
        Self::new(Resources::shared().roots.clone())
    }

    /// Stemmer with no dictionary; rules only.
    pub fn rules_only() -> Self {
        Self::new(Arc::new(RootDictionary::default()))
    }

    pub fn stem(&self, word: &str) -> String {
        if word.chars().count() < MIN_STEM_LEN {
            return word.to_string();
        }

        let plain = strip_joiners(word);
        if let Some(root) = self.roots.root_of(&plain) {
            return root.to_string();
        }

        let phases: [(&[&str], Side); 4] = [
            (VERB_PREFIXES_LF.as_slice(), Side::Prefix),
            (VERB_SUFFIXES_LF.as_slice(), Side::Suffix),
            (SUFFIXES_LF.as_slice(), Side::Suffix),
            (PREFIXES_LF.as_slice(), Side::Prefix),
        ];

        let mut current = word.to_string();
        let mut stripped = false;
        for (affixes, side) in phases {
            if let Some(rest) = strip_one(&current, affixes, side) {
                current = rest;
                stripped = true;
            }
        }

        if stripped && is_valid_stem(&current) {
            current
        } else {
            unchanged(word, plain)
        }
    }

    pub fn stem_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|w| self.stem(w.as_ref())).collect()
    }
}

fn strip_one(word: &str, affixes: &[&str], side: Side) -> Option<String> {
    for affix in affixes {
        let rest = match side {
            Side::Prefix => word
                .strip_prefix(affix)
                .map(|r| r.strip_prefix(ZWNJ).unwrap_or(r)),
            Side::Suffix => word
                .strip_suffix(affix)
                .map(|r| r.strip_suffix(ZWNJ).unwrap_or(r)),
        };
        if let Some(rest) = rest {
            if is_valid_stem(rest) {
                return Some(rest.to_string());
            }
        }
    }
    None
}

fn is_valid_stem(s: &str) -> bool {
    s.chars().count() >= MIN_STEM_LEN && !s.chars().any(is_joiner)
}

fn strip_joiners(word: &str) -> String {
    word.chars().filter(|c| !is_joiner(*c)).collect()
}

/// The input word, minus any joiners it carried (a stem never holds one).
fn unchanged(word: &str, plain: String) -> String {
    if plain.is_empty() || plain.len() == word.len() {
        word.to_string()
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_pass_through() {
        let s = Stemmer::rules_only();
        assert_eq!(s.stem("بد"), "بد");
        assert_eq!(s.stem(""), "");
    }

    #[test]
    fn verb_prefix_then_suffix() {
        let s = Stemmer::rules_only();
        assert_eq!(s.stem("نمیخورم"), "خور");
    }

    #[test]
    fn plural_suffix_with_and_without_joiner() {
        let s = Stemmer::rules_only();
        assert_eq!(s.stem("کتابها"), "کتاب");
        assert_eq!(s.stem("کتاب\u{200C}ها"), "کتاب");
    }

    #[test]
    fn short_remainder_is_rejected() {
        let s = Stemmer::rules_only();
        assert_eq!(s.stem("گلها"), "گلها");
    }

    #[test]
    fn unstripped_word_loses_its_joiners() {
        let s = Stemmer::rules_only();
        // no joiner survives, even when that leaves fewer than three letters
        assert_eq!(s.stem("ا\u{200C}\u{200C}ب"), "اب");
        assert_eq!(s.stem("ک\u{200C}ت"), "کت");
        assert_eq!(Stemmer::shared().stem("ا\u{200C}\u{200C}ب"), "اب");
    }
}
