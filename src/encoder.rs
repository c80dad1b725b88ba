//! Encryption pipeline.
//!
//! 1. Normalize plaintext (placeholders, language folding, alphanumeric filter)
//! 2. Substitute every symbol with its pair of header letters
//! 3. Sanitize the keyword, bounded by the stream length
//! 4. Transpose the stream by the keyword's sorted columns

use tracing::debug;

use crate::error::{CipherError, CipherResult};
use crate::matrix::Matrix;
use crate::polybius::encode_text;
use crate::text::{normalize_keyword, normalize_plaintext, Keyword, Language};
use crate::transposition;

/// Result of encrypting a message, with the intermediate values kept.
#[derive(Debug, Clone)]
pub struct EncryptedMessage {
    /// The ciphertext to transmit.
    pub ciphertext: String,
    /// Plaintext after normalization; what decryption gives back.
    pub normalized_plaintext: String,
    /// The keyword actually used.
    pub keyword: Keyword,
    /// Length of the substituted stream.
    pub stream_len: usize,
}

/// Encrypts `plaintext` with the square and keyword.
///
/// `language` only matters for ADFGX squares.
pub fn encrypt(
    plaintext: &str,
    keyword: &str,
    language: Language,
    matrix: &Matrix,
) -> CipherResult<String> {
    encrypt_detailed(plaintext, keyword, language, matrix).map(|m| m.ciphertext)
}

/// Encrypts and also returns the intermediate values.
pub fn encrypt_detailed(
    plaintext: &str,
    keyword: &str,
    language: Language,
    matrix: &Matrix,
) -> CipherResult<EncryptedMessage> {
    if plaintext.trim().is_empty() {
        return Err(CipherError::MissingInput("input text"));
    }
    if keyword.trim().is_empty() {
        return Err(CipherError::MissingInput("a keyword"));
    }

    let variant = matrix.variant();
    let normalized = normalize_plaintext(plaintext, variant, language);
    if normalized.is_empty() {
        return Err(CipherError::MissingInput("input text containing letters or digits"));
    }
    debug!(%variant, symbols = normalized.len(), "plaintext normalized");

    let stream = encode_text(&normalized, matrix)?;

    let keyword = normalize_keyword(keyword, stream.len())?;
    if keyword.is_empty() {
        return Err(CipherError::MissingInput("a keyword containing letters"));
    }
    debug!(stream = stream.len(), width = keyword.len(), "transposing");

    let ciphertext = transposition::encrypt(&stream, &keyword)?;

    Ok(EncryptedMessage {
        ciphertext,
        normalized_plaintext: normalized,
        keyword,
        stream_len: stream.len(),
    })
}
