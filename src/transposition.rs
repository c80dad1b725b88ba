//! Keyed columnar transposition.
//!
//! The stream is written row by row into a grid as wide as the keyword.
//! Columns are read out in the order of the keyword's sorted letters, one
//! space-separated block per column. A short last row is completed with
//! filler cells that emit nothing, so the first `len % width` columns are
//! one cell longer than the rest.

use crate::error::{CipherError, CipherResult};
use crate::text::Keyword;

/// Shape of the transposition grid for a stream of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of columns (keyword length).
    pub width: usize,
    /// Number of complete rows.
    pub full_rows: usize,
    /// Number of cells in the partial last row.
    pub remainder: usize,
}

impl GridShape {
    pub fn new(len: usize, width: usize) -> Self {
        Self {
            width,
            full_rows: len / width,
            remainder: len % width,
        }
    }

    /// Number of real (non-filler) cells in a column.
    pub fn column_len(&self, col: usize) -> usize {
        if col < self.remainder {
            self.full_rows + 1
        } else {
            self.full_rows
        }
    }

    /// Number of rows including the partial one.
    pub fn rows(&self) -> usize {
        self.full_rows + usize::from(self.remainder > 0)
    }
}

/// Transposes `stream` into space-separated column blocks.
pub fn encrypt(stream: &str, keyword: &Keyword) -> CipherResult<String> {
    if keyword.is_empty() {
        return Err(CipherError::MissingInput("a keyword"));
    }

    let cells: Vec<char> = stream.chars().collect();
    let shape = GridShape::new(cells.len(), keyword.len());

    let blocks: Vec<String> = keyword
        .sorted_columns()
        .into_iter()
        .map(|col| {
            (0..shape.column_len(col))
                .map(|row| cells[row * shape.width + col])
                .collect()
        })
        .collect();

    Ok(blocks.join(" "))
}

/// Reverses [`encrypt`], returning the flat stream.
///
/// Blocks must be made of uppercase letters, one block per keyword letter,
/// each exactly as long as its column would be.
pub fn decrypt(ciphertext: &str, keyword: &Keyword) -> CipherResult<String> {
    if keyword.is_empty() {
        return Err(CipherError::MissingInput("a keyword"));
    }

    let blocks: Vec<&str> = ciphertext.split_whitespace().collect();
    if let Some(bad) = blocks
        .iter()
        .flat_map(|b| b.chars())
        .find(|c| !c.is_ascii_uppercase())
    {
        return Err(CipherError::InvalidCiphertext(format!(
            "unexpected character '{}'",
            bad
        )));
    }

    let total: usize = blocks.iter().map(|b| b.len()).sum();
    if total % 2 != 0 {
        return Err(CipherError::InvalidCiphertext(
            "the number of letters is odd".to_string(),
        ));
    }
    if blocks.len() != keyword.len() {
        return Err(CipherError::InvalidCiphertext(format!(
            "expected {} column blocks, found {}",
            keyword.len(),
            blocks.len()
        )));
    }

    let shape = GridShape::new(total, keyword.len());
    let mut columns: Vec<Vec<char>> = vec![Vec::new(); shape.width];

    for (block, col) in blocks.iter().zip(keyword.sorted_columns()) {
        let expected = shape.column_len(col);
        if block.len() != expected {
            return Err(CipherError::InvalidCiphertext(format!(
                "column {} should hold {} letters, found {}",
                col + 1,
                expected,
                block.len()
            )));
        }
        columns[col] = block.chars().collect();
    }

    let mut stream = String::with_capacity(total);
    for row in 0..shape.rows() {
        for column in &columns {
            if let Some(&c) = column.get(row) {
                stream.push(c);
            }
        }
    }

    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize_keyword;

    fn keyword(raw: &str) -> Keyword {
        normalize_keyword(raw, usize::MAX).unwrap()
    }

    #[test]
    fn test_grid_shape() {
        let shape = GridShape::new(24, 6);
        assert_eq!(shape.rows(), 4);
        assert_eq!(shape.column_len(5), 4);

        let shape = GridShape::new(36, 5);
        assert_eq!(shape.rows(), 8);
        assert_eq!(shape.column_len(0), 8);
        assert_eq!(shape.column_len(1), 7);
    }

    #[test]
    fn test_encrypt_exact_rows() {
        let stream = "DGXDXDDGGGGDDGXDFXDGXGFD";
        let ciphertext = encrypt(stream, &keyword("GERMAN")).unwrap();
        assert_eq!(ciphertext, "XGFF GGGG DDDD DGDG DDXD XGXX");
    }

    #[test]
    fn test_encrypt_with_filler() {
        let stream = "GAXDXGFFGAGAFGFFDAGFGAGAXAAADFDGGGDFGAAXDADDAA";
        let ciphertext = encrypt(stream, &keyword("FOX")).unwrap();
        assert_eq!(
            ciphertext,
            "GDFAFFGAXADGGXDA AXFGGDFGADGDADD XGGAFAGAAFGFAAA"
        );
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let streams = [
            "AD",
            "ADFGXX",
            "DGXDXDDGGGGDDGXDFXDGXGFD",
            "GAXDXGFFGAGAFGFFDAGFGAGAXAAADFDGGGDFGAAXDADDAA",
        ];
        for stream in streams {
            for raw in ["A", "ZA", "KEY", "GERMAN"] {
                let k = keyword(raw);
                if k.len() > stream.len() {
                    continue;
                }
                let ciphertext = encrypt(stream, &k).unwrap();
                assert_eq!(decrypt(&ciphertext, &k).unwrap(), stream, "key {}", raw);
            }
        }
    }

    #[test]
    fn test_no_leading_or_trailing_space() {
        let ciphertext = encrypt("ADFGXXAD", &keyword("QUICK")).unwrap();
        assert_eq!(ciphertext, ciphertext.trim());
        assert_eq!(ciphertext.split(' ').count(), 5);
        assert!(!ciphertext.contains("  "));
    }

    #[test]
    fn test_decrypt_odd_letter_count() {
        let err = decrypt("AD FG A", &keyword("ABC")).unwrap_err();
        assert!(matches!(err, CipherError::InvalidCiphertext(_)));
    }

    #[test]
    fn test_decrypt_wrong_block_count() {
        let err = decrypt("ADFG XA", &keyword("ABC")).unwrap_err();
        assert!(matches!(err, CipherError::InvalidCiphertext(_)));
    }

    #[test]
    fn test_decrypt_wrong_block_lengths() {
        // Six letters over three columns means two per column.
        let err = decrypt("ADF G XA", &keyword("ABC")).unwrap_err();
        assert!(matches!(err, CipherError::InvalidCiphertext(_)));
    }

    #[test]
    fn test_decrypt_rejects_lowercase() {
        let err = decrypt("ad fg", &keyword("AB")).unwrap_err();
        assert!(matches!(err, CipherError::InvalidCiphertext(_)));
    }

    #[test]
    fn test_empty_keyword() {
        let k = keyword("");
        assert_eq!(encrypt("AD", &k), Err(CipherError::MissingInput("a keyword")));
        assert_eq!(decrypt("AD", &k), Err(CipherError::MissingInput("a keyword")));
    }
}
