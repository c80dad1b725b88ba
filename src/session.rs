//! Caller-owned cipher state.
//!
//! A session holds the current square for each variant and the language
//! profile used to build ADFGX squares and fold plaintext. Regenerating a
//! square replaces it wholesale.

use tracing::debug;

use crate::decoder;
use crate::encoder;
use crate::error::{CipherError, CipherResult};
use crate::matrix::{build_from_data, generate_random, generate_seeded, Matrix};
use crate::text::Language;
use crate::variant::Variant;

#[derive(Debug, Clone, Default)]
pub struct CipherSession {
    language: Language,
    adfgx: Option<Matrix>,
    adfgvx: Option<Matrix>,
}

impl CipherSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Changes the language profile. Existing squares are kept.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Builds a new square for `variant`, randomly or from `seed_data`.
    pub fn generate(&mut self, variant: Variant, seed_data: Option<&str>) -> CipherResult<&Matrix> {
        let matrix = match seed_data {
            Some(data) => build_from_data(variant, data, self.language)?,
            None => generate_random(variant, self.language),
        };
        Ok(self.install(matrix))
    }

    /// Builds a new square for `variant` derived from `passphrase`.
    pub fn generate_from_passphrase(&mut self, variant: Variant, passphrase: &str) -> &Matrix {
        self.install(generate_seeded(variant, self.language, passphrase))
    }

    /// Makes `matrix` the current square for its variant.
    pub fn install(&mut self, matrix: Matrix) -> &Matrix {
        debug!(variant = %matrix.variant(), "installing matrix");
        let slot = self.slot_mut(matrix.variant());
        slot.insert(matrix)
    }

    /// The current square for `variant`.
    pub fn matrix(&self, variant: Variant) -> CipherResult<&Matrix> {
        let slot = match variant {
            Variant::Adfgx => &self.adfgx,
            Variant::Adfgvx => &self.adfgvx,
        };
        slot.as_ref()
            .ok_or(CipherError::MatrixNotReady(variant.name()))
    }

    /// Drops the current square for `variant`.
    pub fn clear(&mut self, variant: Variant) {
        *self.slot_mut(variant) = None;
    }

    /// The current square for `variant` in its export form.
    pub fn export(&self, variant: Variant) -> CipherResult<String> {
        self.matrix(variant).map(|m| m.to_string())
    }

    pub fn encrypt(&self, variant: Variant, plaintext: &str, keyword: &str) -> CipherResult<String> {
        check_inputs(plaintext, keyword)?;
        encoder::encrypt(plaintext, keyword, self.language, self.matrix(variant)?)
    }

    pub fn decrypt(&self, variant: Variant, ciphertext: &str, keyword: &str) -> CipherResult<String> {
        check_inputs(ciphertext, keyword)?;
        decoder::decrypt(ciphertext, keyword, self.matrix(variant)?)
    }

    fn slot_mut(&mut self, variant: Variant) -> &mut Option<Matrix> {
        match variant {
            Variant::Adfgx => &mut self.adfgx,
            Variant::Adfgvx => &mut self.adfgvx,
        }
    }
}

/// Empty text or keyword is reported before a missing square.
fn check_inputs(text: &str, keyword: &str) -> CipherResult<()> {
    if keyword.is_empty() || text.is_empty() {
        return Err(CipherError::MissingInput("a keyword and input text"));
    }
    Ok(())
}
