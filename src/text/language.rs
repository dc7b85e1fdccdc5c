//! Script-based language detection

use crate::types::Language;

/// True for code points in the Devanagari block (U+0900..=U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Classify cleaned text by script presence: any Devanagari character means
/// `Hi`, otherwise `En`. Pure and O(len); never produces a "mixed" value.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_devanagari) {
        Language::Hi
    } else {
        Language::En
    }
}
