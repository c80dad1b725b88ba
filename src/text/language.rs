//! Language-specific letter folding for the 5×5 square.
//!
//! A 5×5 square only has room for 25 letters, so each language profile
//! sacrifices one letter and spells it with others instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, CipherResult};

/// A letter-folding profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// `J` is written as `I`.
    #[default]
    #[serde(rename = "en")]
    English,
    /// `Q` is written as `KJU`.
    #[serde(rename = "cs")]
    Czech,
}

impl Language {
    /// All supported profiles.
    pub const ALL: [Language; 2] = [Language::English, Language::Czech];

    /// The letter this profile removes from the square.
    pub fn folded_letter(self) -> char {
        match self {
            Language::English => 'J',
            Language::Czech => 'Q',
        }
    }

    /// What the folded letter is spelled as.
    pub fn replacement(self) -> &'static str {
        match self {
            Language::English => "I",
            Language::Czech => "KJU",
        }
    }

    /// Short code used in settings and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Czech => "cs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Czech => "Czech",
        };
        write!(
            f,
            "{} ('{}' -> '{}')",
            name,
            self.folded_letter(),
            self.replacement()
        )
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "cs" | "cz" | "czech" => Ok(Language::Czech),
            _ => Err(CipherError::InvalidLanguage(s.to_string())),
        }
    }
}

/// Resolves an optional profile name, defaulting to English.
pub fn parse_language(name: Option<&str>) -> CipherResult<Language> {
    match name {
        Some(name) => name.parse(),
        None => Ok(Language::default()),
    }
}

/// Uppercases `text` and folds the profile's letter.
///
/// With `remove_only` the folded letter is deleted instead of replaced.
pub fn fold(text: &str, language: Language, remove_only: bool) -> String {
    let folded = language.folded_letter();
    let replacement = if remove_only { "" } else { language.replacement() };

    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_uppercase) {
        if c == folded {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}
