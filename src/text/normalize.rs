//! Text normalization for the cipher alphabets.
//!
//! This module provides:
//! - ASCII transliteration (accents stripped, uppercased)
//! - Filtering down to the symbols a square can hold
//! - Order-preserving deduplication for matrix seeds and keywords
//! - Placeholder words for spaces (both variants) and digits (ADFGX only)

use std::collections::HashSet;

use deunicode::deunicode;

use super::language::{fold, Language};
use crate::variant::Variant;

/// Placeholder word for a space.
pub const SPACE_TOKEN: &str = "XSPEACEX";

/// Placeholder words for the digits 0-9, used by the 5×5 square only.
pub const DIGIT_TOKENS: [&str; 10] = [
    "XZEROX", "XONEX", "XTWOX", "XTHREEX", "XFOURX", "XFIVEX", "XSIXX", "XSEVENX", "XEIGHTX",
    "XNINEX",
];

/// Transliterates to ASCII and uppercases.
pub fn transliterate(text: &str) -> String {
    deunicode(text).to_ascii_uppercase()
}

/// Keeps only the symbols `variant` can place in its square.
pub fn filter_symbols(text: &str, variant: Variant) -> String {
    text.chars().filter(|&c| variant.allows_symbol(c)).collect()
}

/// Removes repeated characters, keeping the first occurrence of each.
pub fn dedup(text: &str) -> String {
    let mut seen = HashSet::new();
    text.chars().filter(|c| seen.insert(*c)).collect()
}

/// Reduces raw matrix data to unique symbols the square can hold.
pub fn to_matrix_alphabet(text: &str, variant: Variant) -> String {
    dedup(&filter_symbols(&transliterate(text), variant))
}

/// Replaces spaces, and for ADFGX digits, with their placeholder words.
pub fn encode_placeholders(text: &str, variant: Variant) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => out.push_str(SPACE_TOKEN),
            '0'..='9' if variant == Variant::Adfgx => {
                let digit = c as usize - '0' as usize;
                out.push_str(DIGIT_TOKENS[digit]);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Restores what [`encode_placeholders`] replaced. Spaces are restored first.
pub fn decode_placeholders(text: &str, variant: Variant) -> String {
    let mut text = text.replace(SPACE_TOKEN, " ");
    if variant == Variant::Adfgx {
        for (digit, token) in DIGIT_TOKENS.iter().enumerate() {
            if text.contains(token) {
                text = text.replace(token, &digit.to_string());
            }
        }
    }
    text
}

/// Prepares raw plaintext for substitution.
///
/// Transliterates and trims, swaps in placeholder words, drops everything
/// that is not a letter or digit, then folds the language letter for ADFGX.
/// Repeated characters are kept.
pub fn normalize_plaintext(text: &str, variant: Variant, language: Language) -> String {
    let text = transliterate(text);
    let text = encode_placeholders(text.trim(), variant);
    let text: String = text.chars().filter(char::is_ascii_alphanumeric).collect();

    match variant {
        Variant::Adfgx => fold(&text, language, false),
        Variant::Adfgvx => text,
    }
}
