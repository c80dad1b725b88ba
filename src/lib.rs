//! # ADFGVX - classical field ciphers
//!
//! Implements the ADFGX cipher and its ADFGVX extension: a Polybius-style
//! substitution through a square of unique symbols, followed by a
//! keyword-driven columnar transposition.
//!
//! This is a historical cipher for study and puzzles. It offers no modern
//! security guarantees.
//!
//! ## Overview
//!
//! - Each plaintext symbol is replaced by the header letters of its row and
//!   column in the square (`A D F G X`, or `A D F G V X` for the 6×6 square)
//! - The resulting stream is written into a grid as wide as the keyword
//! - Columns are read out in alphabetical order of the keyword's letters,
//!   one space-separated block per column
//!
//! The 5×5 square has no room for digits or all 26 letters, so digits are
//! spelled out as placeholder words and one letter is folded into others
//! according to a [`Language`] profile.
//!
//! ## Example Usage
//!
//! ```rust
//! use adfgvx::{decrypt, encrypt, generate_matrix, Language, Variant};
//!
//! let matrix = generate_matrix(Variant::Adfgx, Some("PHQGIUMEAYLNOFDXKRCVSTZWB"), Some("en")).unwrap();
//!
//! let ciphertext = encrypt("ATTACKATDAWN", "GERMAN", Language::English, &matrix).unwrap();
//! assert_eq!(ciphertext, "XGFF GGGG DDDD DGDG DDXD XGXX");
//!
//! let plaintext = decrypt(&ciphertext, "GERMAN", &matrix).unwrap();
//! assert_eq!(plaintext, "ATTACKATDAWN");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Normalization, placeholders, language folding, keywords
//! - [`matrix`]: Square generation, import and export
//! - [`polybius`]: Symbol to header-pair substitution
//! - [`transposition`]: Keyed columnar transposition
//! - [`encoder`] / [`decoder`]: The full pipelines
//! - [`session`]: Caller-owned current squares
//! - [`settings`]: Persisted settings for the CLI

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod matrix;
pub mod polybius;
pub mod session;
pub mod settings;
pub mod text;
pub mod transposition;
pub mod variant;

// Re-export commonly used types at the crate root
pub use decoder::{decrypt, filter_ciphertext};
pub use encoder::{encrypt, encrypt_detailed, EncryptedMessage};
pub use error::{CipherError, CipherResult};
pub use matrix::{build_from_data, generate_random, generate_seeded, Matrix};
pub use session::CipherSession;
pub use settings::{Settings, SettingsError};
pub use text::{normalize_keyword, normalize_plaintext, parse_language, Keyword, Language};
pub use variant::Variant;

/// Generates a square, randomly or from `seed_data`.
///
/// `language` names the folding profile (`"en"` or `"cs"`) and defaults to
/// English. It only affects ADFGX squares, but is validated either way.
pub fn generate_matrix(
    variant: Variant,
    seed_data: Option<&str>,
    language: Option<&str>,
) -> CipherResult<Matrix> {
    let language = parse_language(language)?;
    match seed_data {
        Some(data) => build_from_data(variant, data, language),
        None => Ok(generate_random(variant, language)),
    }
}
