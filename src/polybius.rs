//! Polybius substitution: one symbol to a pair of header letters and back.

use crate::error::{CipherError, CipherResult};
use crate::matrix::Matrix;

/// Encodes one symbol as its (row, column) header letters.
pub fn encode_char(symbol: char, matrix: &Matrix) -> CipherResult<[char; 2]> {
    let variant = matrix.variant();
    let (row, col) = matrix
        .position(symbol)
        .ok_or(CipherError::SymbolNotFound(symbol))?;

    match (variant.header(row), variant.header(col)) {
        (Some(r), Some(c)) => Ok([r, c]),
        _ => Err(CipherError::SymbolNotFound(symbol)),
    }
}

/// Decodes a pair of header letters back to the symbol they address.
pub fn decode_char(pair: [char; 2], matrix: &Matrix) -> CipherResult<char> {
    let variant = matrix.variant();
    let invalid = || CipherError::InvalidPair(pair.iter().collect());

    let row = variant.header_index(pair[0]).ok_or_else(invalid)?;
    let col = variant.header_index(pair[1]).ok_or_else(invalid)?;
    matrix.get(row, col).ok_or_else(invalid)
}

/// Encodes every symbol of `text` into one flat stream of header letters.
///
/// The result is always twice as long as the input.
pub fn encode_text(text: &str, matrix: &Matrix) -> CipherResult<String> {
    let mut stream = String::with_capacity(text.len() * 2);
    for symbol in text.chars() {
        let [row, col] = encode_char(symbol, matrix)?;
        stream.push(row);
        stream.push(col);
    }
    Ok(stream)
}

/// Decodes a flat stream two letters at a time.
pub fn decode_stream(stream: &str, matrix: &Matrix) -> CipherResult<String> {
    let letters: Vec<char> = stream.chars().collect();
    if letters.len() % 2 != 0 {
        return Err(CipherError::InvalidCiphertext(
            "the number of letters is odd".to_string(),
        ));
    }

    letters
        .chunks_exact(2)
        .map(|pair| decode_char([pair[0], pair[1]], matrix))
        .collect()
}
