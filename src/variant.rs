//! Cipher variants and their header alphabets.
//!
//! ADFGX uses a 5×5 letters-only square labelled `A D F G X`; ADFGVX uses a
//! 6×6 square of letters and digits labelled `A D F G V X`.

use std::fmt;
use std::str::FromStr;

/// Header letters for the 5×5 square.
pub const ADFGX_HEADERS: [char; 5] = ['A', 'D', 'F', 'G', 'X'];

/// Header letters for the 6×6 square.
pub const ADFGVX_HEADERS: [char; 6] = ['A', 'D', 'F', 'G', 'V', 'X'];

/// Which of the two field ciphers is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 5×5 letters-only square; digits travel as placeholder words.
    Adfgx,
    /// 6×6 square holding letters and digits.
    #[default]
    Adfgvx,
}

impl Variant {
    /// Side length of the square.
    pub fn side(self) -> usize {
        match self {
            Variant::Adfgx => 5,
            Variant::Adfgvx => 6,
        }
    }

    /// Number of symbols in a full square.
    pub fn symbol_count(self) -> usize {
        self.side() * self.side()
    }

    /// Row/column labels, indexed by position.
    pub fn headers(self) -> &'static [char] {
        match self {
            Variant::Adfgx => &ADFGX_HEADERS,
            Variant::Adfgvx => &ADFGVX_HEADERS,
        }
    }

    /// Header letter for a row or column index.
    pub fn header(self, index: usize) -> Option<char> {
        self.headers().get(index).copied()
    }

    /// Inverse of [`Variant::header`].
    pub fn header_index(self, letter: char) -> Option<usize> {
        self.headers().iter().position(|&h| h == letter)
    }

    pub fn is_header(self, letter: char) -> bool {
        self.header_index(letter).is_some()
    }

    /// Whether a symbol may appear in this variant's square.
    pub fn allows_symbol(self, c: char) -> bool {
        match self {
            Variant::Adfgx => c.is_ascii_uppercase(),
            Variant::Adfgvx => c.is_ascii_uppercase() || c.is_ascii_digit(),
        }
    }

    /// Human description of the allowed symbols, used in error messages.
    pub fn allowed_description(self) -> &'static str {
        match self {
            Variant::Adfgx => "letters",
            Variant::Adfgvx => "letters and digits",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Adfgx => "ADFGX",
            Variant::Adfgvx => "ADFGVX",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adfgx" | "5" | "5x5" => Ok(Variant::Adfgx),
            "adfgvx" | "6" | "6x6" => Ok(Variant::Adfgvx),
            other => Err(format!("unknown cipher variant '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_bidirectional() {
        for variant in [Variant::Adfgx, Variant::Adfgvx] {
            for (i, &h) in variant.headers().iter().enumerate() {
                assert_eq!(variant.header(i), Some(h));
                assert_eq!(variant.header_index(h), Some(i));
            }
            assert_eq!(variant.header(variant.side()), None);
        }
    }

    #[test]
    fn test_adfgx_has_no_v() {
        assert!(!Variant::Adfgx.is_header('V'));
        assert!(Variant::Adfgvx.is_header('V'));
        assert_eq!(Variant::Adfgx.header_index('X'), Some(4));
        assert_eq!(Variant::Adfgvx.header_index('X'), Some(5));
    }

    #[test]
    fn test_allowed_symbols() {
        assert!(Variant::Adfgx.allows_symbol('Q'));
        assert!(!Variant::Adfgx.allows_symbol('7'));
        assert!(Variant::Adfgvx.allows_symbol('7'));
        assert!(!Variant::Adfgvx.allows_symbol('a'));
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("ADFGX".parse::<Variant>(), Ok(Variant::Adfgx));
        assert_eq!("adfgvx".parse::<Variant>(), Ok(Variant::Adfgvx));
        assert!("playfair".parse::<Variant>().is_err());
    }
}
