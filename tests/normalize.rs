// tests/normalize.rs
//
// Normalizer behaviour on realistic and generated input.

use leximood::normalize;
use leximood::text::normalize::{
    convert_arabic_to_persian, final_cleanup, remove_control_characters, remove_direction_marks,
};
use leximood::text::tables::{ARABIC_TO_PERSIAN, SPACED_PUNCTUATION};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn arabic_letterforms_become_persian() {
    let n = normalize("كتاب");
    assert_eq!(n, "کتاب");
    for (arabic, _) in ARABIC_TO_PERSIAN {
        assert!(!n.contains(arabic));
    }

    let n = normalize("اليوم كتير");
    assert!(n.contains('ی') && n.contains('ک'));
    assert!(!n.contains('ي') && !n.contains('ك'));
}

#[test]
fn invisible_characters_are_removed() {
    let n = normalize("متن\u{200B}تست\u{200C}با\u{200D}کاراکترهای\u{200E}مخفی\u{FEFF}");
    for c in ['\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{FEFF}'] {
        assert!(!n.contains(c), "{c:?} survived");
    }
    assert_eq!(n, "متنتستباکاراکترهایمخفی");
}

#[test]
fn control_characters_are_removed_but_text_kept() {
    let cleaned = remove_control_characters("متن\u{0}تست\u{1}با\u{2}کاراکترهای\u{7F}کنترلی");
    assert_eq!(cleaned, "متنتستباکاراکترهایکنترلی");
    // tab/newline are whitespace, not stripped here
    assert_eq!(remove_control_characters("a\tb\nc"), "a\tb\nc");
}

#[test]
fn direction_marks_are_removed() {
    let cleaned = remove_direction_marks("متن\u{200E}تست\u{200F}با");
    assert_eq!(cleaned, "متنتستبا");
}

#[test]
fn whitespace_is_collapsed_and_trimmed() {
    assert_eq!(
        normalize("  متن    با\t\tفاصله\n\nاضافی  "),
        "متن با فاصله اضافی"
    );
    assert_eq!(final_cleanup("  متن  با  "), "متن با");
}

#[test]
fn end_to_end_keeps_punctuation() {
    let n = normalize("اليوم، كتير خوشحال هستم! چطوری؟");
    assert_eq!(n, "الیوم، کتیر خوشحال هستم! چطوری؟");
    assert_eq!(convert_arabic_to_persian("ي"), "ی");
}

#[test]
fn blank_input_comes_back_verbatim() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "   ");
    assert_eq!(normalize("\u{1C}\u{1F}"), "\u{1C}\u{1F}");
}

#[test]
fn runs_of_marks_keep_no_inner_space() {
    assert_eq!(normalize("الف :: ب"), "الف:: ب");
    assert_eq!(normalize("د :\u{200B}: ؛ پ"), "د::؛ پ");
    let once = normalize("واقعا ؟!! . باشه");
    assert_eq!(once, "واقعا؟!!. باشه");
    assert_eq!(normalize(&once), once);
}

const ALPHABET: &[char] = &[
    'ا', 'ب', 'پ', 'ت', 'خ', 'د', 'ر', 'س', 'ک', 'گ', 'م', 'ن', 'و', 'ه', 'ی', 'آ', 'ي', 'ك',
    'ة', 'أ', 'ؤ', 'ى', '\u{064B}', '\u{0650}', '\u{0640}', '۲', '٣', '7', ' ', ' ', '\t', '\n',
    '\u{00A0}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{FEFF}', '\u{1}',
    '\u{7F}', '،', '؛', '؟', '!', '.', ':', 'A', 'b',
];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.random_range(1..40);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn normalization_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x1e71);
    for _ in 0..2_000 {
        let raw = random_text(&mut rng);
        if raw.trim().is_empty() {
            continue;
        }
        let once = normalize(&raw);
        assert_eq!(normalize(&once), once, "input {raw:?}");
    }
}

#[test]
fn normalized_text_has_no_forbidden_code_points() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let raw = random_text(&mut rng);
        if raw.trim().is_empty() {
            continue;
        }
        let n = normalize(&raw);
        assert!(!n.contains("  "), "{n:?}");
        assert_eq!(n.trim(), n);
        assert!(!n.chars().any(|c| c.is_control()), "{n:?}");
        assert!(!n.chars().any(|c| ('\u{200B}'..='\u{200F}').contains(&c) || c == '\u{FEFF}'));
        assert!(!ARABIC_TO_PERSIAN.iter().any(|(a, _)| n.contains(*a)));
        for mark in SPACED_PUNCTUATION {
            assert!(!n.contains(&format!(" {mark}")), "{n:?}");
        }
    }
}
