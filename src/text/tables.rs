// src/text/tables.rs
//! Static rule tables shared by the normalizer, segmenter and stemmer.
//! Immutable after first access.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';
pub const TATWEEL: char = '\u{0640}';

pub const MIN_STEM_LEN: usize = 3;

/// Arabic-script letterforms and their Persian canonical equivalents.
pub const ARABIC_TO_PERSIAN: [(char, char); 16] = [
    ('\u{064A}', 'ی'), // ي yeh
    ('\u{0649}', 'ی'), // ى alef maksura
    ('\u{0626}', 'ی'), // ئ yeh with hamza
    ('\u{0678}', 'ی'), // ٸ high hamza yeh
    ('\u{06CD}', 'ی'), // ۍ yeh with tail
    ('\u{06D0}', 'ی'), // ې e
    ('\u{0643}', 'ک'), // ك kaf
    ('\u{06AA}', 'ک'), // ڪ swash kaf
    ('\u{0629}', 'ه'), // ة teh marbuta
    ('\u{06C1}', 'ه'), // ہ heh goal
    ('\u{06D5}', 'ه'), // ە ae
    ('\u{06BE}', 'ه'), // ھ heh doachashmee
    ('\u{0623}', 'ا'), // أ alef with hamza above
    ('\u{0625}', 'ا'), // إ alef with hamza below
    ('\u{0671}', 'ا'), // ٱ alef wasla
    ('\u{0624}', 'و'), // ؤ waw with hamza
];

pub static ARABIC_TO_PERSIAN_MAP: Lazy<HashMap<char, char>> =
    Lazy::new(|| ARABIC_TO_PERSIAN.iter().copied().collect());

/// Marks that get their spacing canonicalized, in processing order.
pub const SPACED_PUNCTUATION: [char; 6] = ['،', '؛', '؟', '!', '.', ':'];

pub const SENTENCE_TERMINATORS: [char; 3] = ['؟', '!', '.'];

/// Characters trimmed from both ends of a word token.
pub const WORD_EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'', '«', '»', '،', '؛',
    '؟', '-', '–', '—', '…', '*', '/', '\\',
];

pub fn is_joiner(c: char) -> bool {
    c == ZWNJ || c == ZWJ
}

/// Closed-class words dropped from word lists: pronouns, prepositions,
/// conjunctions and common auxiliary forms.
const STOP_WORD_LIST: &[&str] = &[
    // demonstratives, prepositions, conjunctions
    "این", "آن", "که", "را", "به", "از", "در", "با", "برای", "تا", "بر", "بی", "پس", "پیش",
    "و", "یا", "نه", "هم", "نیز", "همچنین", "اما", "ولی", "اگر", "چون", "زیرا", "سپس",
    "یک", "بین", "میان", "درباره", "مانند", "مثل", "طی", "توسط", "بدون", "روی", "زیر",
    // pronouns and reflexives
    "من", "تو", "او", "ما", "شما", "آنها", "اینها", "ایشان", "وی", "خود", "خویش", "خویشتن",
    "خودم", "خودت", "خودش", "خودمان", "خودتان", "خودشان",
    // interrogatives and quantifiers
    "چرا", "چگونه", "کجا", "کی", "چه", "چند", "کدام", "کدام\u{200C}یک", "چطور", "چقدر",
    "همه", "هیچ", "هر", "تمام", "همگی", "چیزی", "کسی", "جایی", "وقتی",
    "همه\u{200C}ی", "همه\u{200C}ی\u{200C}این", "همه\u{200C}ی\u{200C}آن",
    "همه\u{200C}ی\u{200C}آنها", "همه\u{200C}ی\u{200C}اینها", "همه\u{200C}ی\u{200C}ما",
    "همه\u{200C}ی\u{200C}شما",
    // auxiliaries and copulas
    "است", "هست", "هستند", "هستم", "هستی", "هستیم", "هستید", "نیست", "بود", "بودند",
    "بوده", "بوده\u{200C}اند", "شد", "شده", "شده\u{200C}اند", "شده\u{200C}بود",
    "شده\u{200C}بودند", "شود", "می\u{200C}شود", "می\u{200C}شوند", "می\u{200C}کرد",
    "می\u{200C}کردند", "کرده", "کرده\u{200C}اند", "خواهد", "خواهند", "دارد", "دارند",
    "داشته", "داشته\u{200C}اند", "باید", "شاید",
    // spatial adverbs
    "بالا", "پایین", "چپ", "راست", "جلو", "عقب", "داخل", "خارج", "کنار", "پشت", "جلوی",
    "بالاتر", "پایین\u{200C}تر", "چپ\u{200C}تر", "راست\u{200C}تر", "جلوتر", "عقب\u{200C}تر",
];

/// Stop words in both their listed spelling and their joiner-free spelling,
/// since normalized text carries no zero-width joiners.
pub static STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut set = HashSet::with_capacity(STOP_WORD_LIST.len() * 2);
    for w in STOP_WORD_LIST {
        set.insert((*w).to_string());
        set.insert(w.chars().filter(|c| !is_joiner(*c)).collect());
    }
    set
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

const VERB_PREFIXES: &[&str] = &["می", "نمی", "بی", "بر", "در", "فرا", "فرو", "وا", "هم"];

const VERB_SUFFIXES: &[&str] = &[
    "م",
    "ی",
    "د",
    "یم",
    "ید",
    "ند",
    "ه",
    "ه\u{200C}ای",
    "ه\u{200C}ا",
    "ه\u{200C}ان",
    "ه\u{200C}ی",
    "ه\u{200C}یی",
    "ه\u{200C}ی\u{200C}ها",
    "ه\u{200C}ی\u{200C}ان",
    "ه\u{200C}ی\u{200C}ات",
    "ه\u{200C}ی\u{200C}ین",
    "ه\u{200C}ی\u{200C}ون",
];

const SUFFIXES: &[&str] = &[
    "ها",
    "ان",
    "ات",
    "ین",
    "ون",
    "ی",
    "یی",
    "ی\u{200C}ها",
    "ی\u{200C}ان",
    "ی\u{200C}ات",
    "ی\u{200C}ین",
    "ی\u{200C}ون",
    "ی\u{200C}ی",
    "ی\u{200C}یی",
    "ی\u{200C}ی\u{200C}ها",
    "ی\u{200C}ی\u{200C}ان",
    "ی\u{200C}ی\u{200C}ات",
    "ی\u{200C}ی\u{200C}ین",
    "ی\u{200C}ی\u{200C}ون",
    "ی\u{200C}ی\u{200C}ی",
    "ی\u{200C}ی\u{200C}یی",
];

const PREFIXES: &[&str] = &[
    "بی", "با", "بر", "پس", "پیش", "در", "را", "رو", "زیر", "سو", "سوی", "فرا", "فرو", "کم",
    "که", "گه", "می", "نا", "نو", "وا", "هم", "هیچ",
];

/// Deduplicated, longest first; equal lengths keep list order.
fn longest_first(list: &[&'static str]) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let mut out: Vec<&'static str> = list.iter().copied().filter(|a| seen.insert(*a)).collect();
    out.sort_by_key(|a| std::cmp::Reverse(a.chars().count()));
    out
}

pub static VERB_PREFIXES_LF: Lazy<Vec<&'static str>> = Lazy::new(|| longest_first(VERB_PREFIXES));
pub static VERB_SUFFIXES_LF: Lazy<Vec<&'static str>> = Lazy::new(|| longest_first(VERB_SUFFIXES));
pub static SUFFIXES_LF: Lazy<Vec<&'static str>> = Lazy::new(|| longest_first(SUFFIXES));
pub static PREFIXES_LF: Lazy<Vec<&'static str>> = Lazy::new(|| longest_first(PREFIXES));
