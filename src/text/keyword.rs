//! Keyword sanitizing for the columnar transposition.

use std::fmt;

use super::normalize::{dedup, transliterate};
use crate::error::{CipherError, CipherResult};

/// A transposition keyword: unique uppercase letters in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    letters: Vec<char>,
}

impl Keyword {
    /// Number of letters, which is also the grid width.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Column indices in the order their letters sort.
    ///
    /// Letters are unique, so the order is total.
    pub fn sorted_columns(&self) -> Vec<usize> {
        let mut columns: Vec<usize> = (0..self.letters.len()).collect();
        columns.sort_by_key(|&i| self.letters[i]);
        columns
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Sanitizes a raw keyword and checks it against the length it will key.
///
/// An empty result is returned as-is; rejecting it is up to the caller.
pub fn normalize_keyword(raw: &str, bound: usize) -> CipherResult<Keyword> {
    let cleaned: String = transliterate(raw)
        .trim()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();
    let letters: Vec<char> = dedup(&cleaned).chars().collect();

    if letters.len() > bound {
        return Err(CipherError::KeywordTooLong { max: bound });
    }

    Ok(Keyword { letters })
}
