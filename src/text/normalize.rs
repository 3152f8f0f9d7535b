// src/text/normalize.rs
//! Canonicalize Persian text: letterforms, invisible characters, whitespace and
//! punctuation spacing. `normalize` is idempotent on non-blank input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::is_blank;
use super::tables::{ARABIC_TO_PERSIAN_MAP, SPACED_PUNCTUATION, TATWEEL};

static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// One `\s*<mark>\s*` pattern per spaced mark, in processing order.
static RE_PUNCT: Lazy<Vec<(char, Regex)>> = Lazy::new(|| {
    SPACED_PUNCTUATION
        .iter()
        .map(|&mark| {
            let pat = format!(r"\s*{}\s*", regex::escape(&mark.to_string()));
            (mark, Regex::new(&pat).expect("punctuation regex"))
        })
        .collect()
});

/// Whitespace in front of any spaced mark, including inside runs like `::`.
static RE_SPACE_BEFORE_MARK: Lazy<Regex> = Lazy::new(|| {
    let class: String = SPACED_PUNCTUATION
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Regex::new(&format!(r"\s+([{class}])")).expect("space-before-mark regex")
});

/// Normalize `text`.
///
/// Empty or all-whitespace input is returned verbatim.
pub fn normalize(text: &str) -> String {
    if is_blank(text) {
        return text.to_string();
    }

    // 1) Arabic letterforms -> Persian
    let mut out = convert_arabic_to_persian(text);

    // 2) Diacritics, Arabic-Indic / Persian digits, tatweel
    out.retain(|c| !is_diacritic_digit_or_tatweel(c));

    // 3) Control and zero-width characters
    out = remove_control_characters(&out);

    // 4) LRM / RLM
    out = remove_direction_marks(&out);

    // 5) Collapse whitespace
    out = collapse_whitespace(&out);

    // 6) Punctuation spacing
    out = normalize_punctuation_spacing(&out);

    // 7) Final cleanup
    final_cleanup(&out)
}

pub fn convert_arabic_to_persian(text: &str) -> String {
    text.chars()
        .map(|c| ARABIC_TO_PERSIAN_MAP.get(&c).copied().unwrap_or(c))
        .collect()
}

fn is_diacritic_digit_or_tatweel(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}' | // Quranic annotation signs
        '\u{064B}'..='\u{065F}' | // fathatan .. wavy hamza below
        '\u{0670}' |              // superscript alef
        '\u{0660}'..='\u{0669}' | // Arabic-Indic digits
        '\u{06F0}'..='\u{06F9}'   // Persian digits
    ) || c == TATWEEL
}

/// Drops C0 controls except tab/LF/CR, DEL, zero-width space/non-joiner/joiner
/// and the zero-width no-break space.
pub fn remove_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(*c,
                '\u{00}'..='\u{08}'
                | '\u{0B}'..='\u{0C}'
                | '\u{0E}'..='\u{1F}'
                | '\u{7F}'
                | '\u{200B}'..='\u{200D}'
                | '\u{FEFF}'
            )
        })
        .collect()
}

pub fn remove_direction_marks(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(*c, '\u{200E}' | '\u{200F}'))
        .collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    RE_WS.replace_all(text, " ").into_owned()
}

/// No whitespace before each mark, exactly one space after it. A run of
/// adjacent marks stays glued together and gets one space after its last mark.
pub fn normalize_punctuation_spacing(text: &str) -> String {
    let mut out = text.to_string();
    let mut touched = false;
    for (mark, re) in RE_PUNCT.iter() {
        if !out.contains(*mark) {
            continue;
        }
        let replacement = format!("{mark} ");
        out = re.replace_all(&out, replacement.as_str()).into_owned();
        touched = true;
    }
    if touched {
        out = RE_SPACE_BEFORE_MARK.replace_all(&out, "$1").into_owned();
    }
    out
}

pub fn final_cleanup(text: &str) -> String {
    collapse_whitespace(text.trim())
}
