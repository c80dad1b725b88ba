//! Text processing for the field ciphers.
//!
//! This module provides:
//! - Transliteration and filtering to the square's alphabet
//! - Placeholder words for spaces and digits
//! - Language-specific letter folding for the 5×5 square
//! - Keyword sanitizing

pub mod keyword;
pub mod language;
pub mod normalize;

pub use keyword::{normalize_keyword, Keyword};
pub use language::{fold, parse_language, Language};
pub use normalize::{
    decode_placeholders, dedup, encode_placeholders, filter_symbols, normalize_plaintext,
    to_matrix_alphabet, transliterate, DIGIT_TOKENS, SPACE_TOKEN,
};
