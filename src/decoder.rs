//! Decryption pipeline.
//!
//! Mirrors the encoder: validate the ciphertext, undo the transposition,
//! decode header pairs back into symbols, then restore placeholder words.

use tracing::debug;

use crate::error::{CipherError, CipherResult};
use crate::matrix::Matrix;
use crate::polybius::decode_stream;
use crate::text::{decode_placeholders, normalize_keyword, transliterate};
use crate::transposition;
use crate::variant::Variant;

/// Cleans raw ciphertext and checks it only uses the variant's header letters.
///
/// Returns the uppercased, trimmed ciphertext.
pub fn filter_ciphertext(ciphertext: &str, variant: Variant) -> CipherResult<String> {
    let ciphertext = transliterate(ciphertext).trim().to_string();

    if let Some(bad) = ciphertext
        .chars()
        .find(|&c| !c.is_whitespace() && !variant.is_header(c))
    {
        return Err(CipherError::InvalidCiphertext(format!(
            "'{}' is not an {} header letter",
            bad, variant
        )));
    }

    let letters = ciphertext.chars().filter(|c| !c.is_whitespace()).count();
    if letters % 2 != 0 {
        return Err(CipherError::InvalidCiphertext(
            "the number of letters is odd".to_string(),
        ));
    }

    Ok(ciphertext)
}

/// Decrypts `ciphertext` with the square and keyword used to encrypt it.
///
/// Returns the normalized plaintext: uppercase, with spaces (and for ADFGX
/// digits) restored and language folding left in place.
pub fn decrypt(ciphertext: &str, keyword: &str, matrix: &Matrix) -> CipherResult<String> {
    if ciphertext.trim().is_empty() {
        return Err(CipherError::MissingInput("input text"));
    }
    if keyword.trim().is_empty() {
        return Err(CipherError::MissingInput("a keyword"));
    }

    let variant = matrix.variant();
    let ciphertext = filter_ciphertext(ciphertext, variant)?;
    let letters = ciphertext.chars().filter(|c| !c.is_whitespace()).count();

    let keyword = normalize_keyword(keyword, letters)?;
    if keyword.is_empty() {
        return Err(CipherError::MissingInput("a keyword containing letters"));
    }
    debug!(%variant, letters, width = keyword.len(), "undoing transposition");

    let stream = transposition::decrypt(&ciphertext, &keyword)?;
    let symbols = decode_stream(&stream, matrix)?;

    Ok(decode_placeholders(&symbols, variant))
}
