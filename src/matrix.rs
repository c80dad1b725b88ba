//! Substitution squares for ADFGX and ADFGVX.
//!
//! A square is either shuffled from the variant's full alphabet or built
//! from caller-supplied data. Once built it is never mutated; regenerating
//! means building a new one.

use std::collections::HashSet;
use std::fmt;

use hkdf::Hkdf;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use tracing::debug;

use crate::error::{CipherError, CipherResult};
use crate::text::{dedup, fold, to_matrix_alphabet, Language};
use crate::variant::Variant;

/// HKDF salt for passphrase-derived squares.
pub const SALT_MATRIX: &[u8] = b"ADFGVX-MATRIX-V1";

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// A square of unique symbols, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    variant: Variant,
    cells: Vec<char>,
}

impl Matrix {
    /// Imports an exported square exactly as given.
    ///
    /// Unlike [`build_from_data`], nothing is transliterated, filtered or
    /// folded: the input must already be `side²` distinct allowed symbols.
    pub fn from_symbols(variant: Variant, symbols: &str) -> CipherResult<Self> {
        let cells: Vec<char> = symbols.trim().chars().collect();
        let unique: HashSet<char> = cells.iter().copied().collect();

        if cells.len() != variant.symbol_count()
            || unique.len() != cells.len()
            || !cells.iter().all(|&c| variant.allows_symbol(c))
        {
            return Err(CipherError::InvalidMatrixData {
                expected: variant.symbol_count(),
                found: unique.len(),
                allowed: variant.allowed_description(),
            });
        }

        Ok(Self { variant, cells })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn side(&self) -> usize {
        self.variant.side()
    }

    /// All symbols, row-major.
    pub fn symbols(&self) -> &[char] {
        &self.cells
    }

    /// Symbol at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        let side = self.side();
        if row >= side || col >= side {
            return None;
        }
        self.cells.get(row * side + col).copied()
    }

    /// Row and column of `symbol`, by linear scan.
    pub fn position(&self, symbol: char) -> Option<(usize, usize)> {
        let side = self.side();
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|i| (i / side, i % side))
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.side())
    }

    /// Renders the square with its header letters along both edges.
    pub fn render_table(&self) -> String {
        let headers = self.variant.headers();
        let mut out = String::from(" ");
        for h in headers {
            out.push(' ');
            out.push(*h);
        }
        out.push('\n');

        for (h, row) in headers.iter().zip(self.rows()) {
            out.push(*h);
            for c in row {
                out.push(' ');
                out.push(*c);
            }
            out.push('\n');
        }
        out
    }
}

/// The export form: all symbols row-major with no separators.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The full alphabet a variant's square is drawn from.
///
/// For ADFGX the language letter is folded away, leaving 25 letters.
pub fn base_alphabet(variant: Variant, language: Language) -> Vec<char> {
    let alphabet = match variant {
        Variant::Adfgx => dedup(&fold(LETTERS, language, false)),
        Variant::Adfgvx => format!("{}{}", LETTERS, DIGITS),
    };
    alphabet.chars().collect()
}

/// Shuffles the variant's alphabet into a new square using `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    variant: Variant,
    language: Language,
    rng: &mut R,
) -> Matrix {
    let mut cells = base_alphabet(variant, language);
    cells.shuffle(rng);
    Matrix { variant, cells }
}

/// Generates a uniformly random square.
pub fn generate_random(variant: Variant, language: Language) -> Matrix {
    debug!(%variant, "generating random matrix");
    generate_with_rng(variant, language, &mut rand::thread_rng())
}

/// Generates a square determined entirely by `passphrase`.
///
/// The same passphrase, variant and language always give the same square.
pub fn generate_seeded(variant: Variant, language: Language, passphrase: &str) -> Matrix {
    debug!(%variant, "generating passphrase-seeded matrix");
    let seed = derive_seed(passphrase.as_bytes(), SALT_MATRIX);
    let mut rng = ChaCha20Rng::from_seed(seed);
    generate_with_rng(variant, language, &mut rng)
}

/// Builds a square from caller-supplied data.
///
/// The data is transliterated, filtered and deduplicated. For ADFGX the
/// language letter must not appear in it.
pub fn build_from_data(variant: Variant, data: &str, language: Language) -> CipherResult<Matrix> {
    let mut symbols = to_matrix_alphabet(data, variant);

    if variant == Variant::Adfgx {
        let folded = language.folded_letter();
        if symbols.contains(folded) {
            return Err(CipherError::LanguageConflict(folded));
        }
        symbols = fold(&symbols, language, true);
    }

    let cells: Vec<char> = symbols.chars().filter(|&c| variant.allows_symbol(c)).collect();
    if cells.len() != variant.symbol_count() {
        return Err(CipherError::InvalidMatrixData {
            expected: variant.symbol_count(),
            found: cells.len(),
            allowed: variant.allowed_description(),
        });
    }

    debug!(%variant, "built matrix from supplied data");
    Ok(Matrix { variant, cells })
}

/// Derives a 32-byte seed using HKDF-SHA256.
fn derive_seed(input: &[u8], salt: &[u8]) -> [u8; 32] {
    let hk = Hkdf::<Sha256>::new(Some(salt), input);
    let mut output = [0u8; 32];
    hk.expand(b"seed", &mut output)
        .expect("32 bytes is a valid HKDF-SHA256 output length");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED_25: &str = "PHQGIUMEAYLNOFDXKRCVSTZWB";

    fn assert_valid(matrix: &Matrix) {
        let variant = matrix.variant();
        let unique: HashSet<char> = matrix.symbols().iter().copied().collect();
        assert_eq!(matrix.symbols().len(), variant.symbol_count());
        assert_eq!(unique.len(), variant.symbol_count());
        assert!(matrix.symbols().iter().all(|&c| variant.allows_symbol(c)));
    }

    #[test]
    fn test_base_alphabet_sizes() {
        assert_eq!(base_alphabet(Variant::Adfgx, Language::English).len(), 25);
        assert_eq!(base_alphabet(Variant::Adfgx, Language::Czech).len(), 25);
        assert_eq!(base_alphabet(Variant::Adfgvx, Language::Czech).len(), 36);
    }

    #[test]
    fn test_base_alphabet_drops_folded_letter() {
        assert!(!base_alphabet(Variant::Adfgx, Language::English).contains(&'J'));
        assert!(!base_alphabet(Variant::Adfgx, Language::Czech).contains(&'Q'));
        assert!(base_alphabet(Variant::Adfgx, Language::Czech).contains(&'J'));
    }

    #[test]
    fn test_generate_random_is_valid() {
        for _ in 0..20 {
            assert_valid(&generate_random(Variant::Adfgx, Language::English));
            assert_valid(&generate_random(Variant::Adfgx, Language::Czech));
            assert_valid(&generate_random(Variant::Adfgvx, Language::English));
        }
    }

    #[test]
    fn test_generate_with_rng_deterministic() {
        let a = generate_with_rng(
            Variant::Adfgvx,
            Language::English,
            &mut ChaCha20Rng::seed_from_u64(7),
        );
        let b = generate_with_rng(
            Variant::Adfgvx,
            Language::English,
            &mut ChaCha20Rng::seed_from_u64(7),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Every symbol should land in the first cell at some point.
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut firsts = HashSet::new();
        for _ in 0..2000 {
            let m = generate_with_rng(Variant::Adfgx, Language::English, &mut rng);
            firsts.insert(m.symbols()[0]);
        }
        assert_eq!(firsts.len(), 25);
    }

    #[test]
    fn test_generate_seeded() {
        let a = generate_seeded(Variant::Adfgx, Language::English, "kennwort");
        let b = generate_seeded(Variant::Adfgx, Language::English, "kennwort");
        let c = generate_seeded(Variant::Adfgx, Language::English, "losung");
        assert_valid(&a);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_build_from_data() {
        let m = build_from_data(Variant::Adfgx, SEED_25, Language::English).unwrap();
        assert_eq!(m.to_string(), SEED_25);
        assert_eq!(m.get(0, 0), Some('P'));
        assert_eq!(m.get(4, 4), Some('B'));
        assert_eq!(m.get(5, 0), None);
    }

    #[test]
    fn test_build_from_data_normalizes() {
        let m = build_from_data(
            Variant::Adfgx,
            "phqg-iumé ayln ofdx krcv stzw bbbb",
            Language::English,
        )
        .unwrap();
        assert_eq!(m.to_string(), SEED_25);
    }

    #[test]
    fn test_build_from_data_language_conflict() {
        let data = "JHQGIUMEAYLNOFDXKRCVSTZWB";
        assert_eq!(
            build_from_data(Variant::Adfgx, data, Language::English),
            Err(CipherError::LanguageConflict('J'))
        );
        assert_eq!(
            build_from_data(Variant::Adfgx, SEED_25, Language::Czech),
            Err(CipherError::LanguageConflict('Q'))
        );
    }

    #[test]
    fn test_build_from_data_wrong_count() {
        let err = build_from_data(Variant::Adfgx, "ABCDEF", Language::English).unwrap_err();
        assert_eq!(
            err,
            CipherError::InvalidMatrixData {
                expected: 25,
                found: 6,
                allowed: "letters"
            }
        );
    }

    #[test]
    fn test_build_from_data_adfgvx_ignores_language() {
        let data = "NA1C3H8TB2OME5WRPD4F6G7I9JKLQSUVXYZ0";
        let m = build_from_data(Variant::Adfgvx, data, Language::Czech).unwrap();
        assert_eq!(m.to_string(), data);
        assert_eq!(m.position('0'), Some((5, 5)));
    }

    #[test]
    fn test_from_symbols() {
        let m = Matrix::from_symbols(Variant::Adfgx, SEED_25).unwrap();
        assert_eq!(m.position('G'), Some((0, 3)));
        assert!(Matrix::from_symbols(Variant::Adfgx, "phqgiumeaylnofdxkrcvstzwb").is_err());
        assert!(Matrix::from_symbols(Variant::Adfgvx, SEED_25).is_err());
        assert!(Matrix::from_symbols(Variant::Adfgx, "PPQGIUMEAYLNOFDXKRCVSTZWB").is_err());
    }

    #[test]
    fn test_render_table() {
        let m = Matrix::from_symbols(Variant::Adfgx, SEED_25).unwrap();
        let table = m.render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "  A D F G X");
        assert_eq!(lines[1], "A P H Q G I");
        assert_eq!(lines[5], "X S T Z W B");
    }
}
