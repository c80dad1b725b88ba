//! Error types for the cipher pipeline.

use thiserror::Error;

/// Errors that can occur while building matrices or running the cipher.
///
/// Every variant describes invalid input or configuration, so none of them
/// are worth retrying. Messages are written to be shown to a user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid language specified: '{0}' (expected 'en' or 'cs')")]
    InvalidLanguage(String),

    #[error("The matrix data contains '{0}' which cannot be used with the specified language")]
    LanguageConflict(char),

    #[error("The matrix data needs to have exactly {expected} unique {allowed}, found {found}")]
    InvalidMatrixData {
        expected: usize,
        found: usize,
        allowed: &'static str,
    },

    #[error("The character '{0}' couldn't be found in the matrix during encoding")]
    SymbolNotFound(char),

    #[error("'{0}' is not a valid header pair for this matrix")]
    InvalidPair(String),

    #[error("The keyword is too long! Considering your input, it cannot be longer than {max} characters")]
    KeywordTooLong { max: usize },

    #[error("You must enter {0}")]
    MissingInput(&'static str),

    #[error("The provided ciphertext is invalid: {0}")]
    InvalidCiphertext(String),

    #[error("You need to generate the {0} matrix first")]
    MatrixNotReady(&'static str),
}

/// Result alias used throughout the library.
pub type CipherResult<T> = Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_readable() {
        let err = CipherError::KeywordTooLong { max: 4 };
        assert_eq!(
            err.to_string(),
            "The keyword is too long! Considering your input, it cannot be longer than 4 characters"
        );

        let err = CipherError::InvalidMatrixData {
            expected: 25,
            found: 24,
            allowed: "letters",
        };
        assert!(err.to_string().contains("exactly 25 unique letters"));
    }
}
