//! Persisted settings for the command-line tool.
//!
//! Stored in `~/.adfgvx/config.toml`: the default language profile and the
//! saved current square for each variant.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CipherError;
use crate::matrix::Matrix;
use crate::session::CipherSession;
use crate::text::Language;
use crate::variant::Variant;

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("Saved {variant} matrix is invalid: {source}")]
    InvalidSavedMatrix {
        variant: Variant,
        source: CipherError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Saved squares in their export form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedMatrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adfgx: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adfgvx: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Default language profile for ADFGX.
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub matrices: SavedMatrices,
}

impl Settings {
    /// Loads settings from `path`, or defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to `path`, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        // Saved squares are key material
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Default settings file location.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// The saved square for `variant`, validated.
    pub fn saved_matrix(&self, variant: Variant) -> Result<Option<Matrix>, SettingsError> {
        let saved = match variant {
            Variant::Adfgx => &self.matrices.adfgx,
            Variant::Adfgvx => &self.matrices.adfgvx,
        };

        saved
            .as_deref()
            .map(|symbols| Matrix::from_symbols(variant, symbols))
            .transpose()
            .map_err(|source| SettingsError::InvalidSavedMatrix { variant, source })
    }

    /// Records `matrix` as the saved square for its variant.
    pub fn save_matrix(&mut self, matrix: &Matrix) {
        let symbols = Some(matrix.to_string());
        match matrix.variant() {
            Variant::Adfgx => self.matrices.adfgx = symbols,
            Variant::Adfgvx => self.matrices.adfgvx = symbols,
        }
    }

    /// Builds a session holding the saved squares.
    pub fn to_session(&self) -> Result<CipherSession, SettingsError> {
        let mut session = CipherSession::new(self.language);
        for variant in [Variant::Adfgx, Variant::Adfgvx] {
            if let Some(matrix) = self.saved_matrix(variant)? {
                session.install(matrix);
            }
        }
        Ok(session)
    }
}

/// Get the config directory: `~/.adfgvx`.
pub fn get_config_dir() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(".adfgvx"))
        .ok_or(SettingsError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SEED_25: &str = "PHQGIUMEAYLNOFDXKRCVSTZWB";

    fn setup_test_config() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        (temp_dir, config_path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, path) = setup_test_config();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, path) = setup_test_config();

        let mut settings = Settings {
            language: Language::Czech,
            ..Settings::default()
        };
        settings.save_matrix(&Matrix::from_symbols(Variant::Adfgx, SEED_25).unwrap());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.matrices.adfgx.as_deref(), Some(SEED_25));
        assert_eq!(loaded.matrices.adfgvx, None);
    }

    #[test]
    fn test_toml_layout() {
        let content = "language = \"cs\"\n\n[matrices]\nadfgx = \"PHQGIUMEAYLNOFDXKRCVSTZWB\"\n";
        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(settings.language, Language::Czech);
        assert!(settings.saved_matrix(Variant::Adfgx).unwrap().is_some());
        assert!(settings.saved_matrix(Variant::Adfgvx).unwrap().is_none());
    }

    #[test]
    fn test_invalid_saved_matrix() {
        let settings = Settings {
            matrices: SavedMatrices {
                adfgx: Some("ABC".to_string()),
                adfgvx: None,
            },
            ..Settings::default()
        };
        assert!(matches!(
            settings.to_session(),
            Err(SettingsError::InvalidSavedMatrix { variant: Variant::Adfgx, .. })
        ));
    }

    #[test]
    fn test_to_session() {
        let mut settings = Settings::default();
        settings.save_matrix(&Matrix::from_symbols(Variant::Adfgx, SEED_25).unwrap());

        let session = settings.to_session().unwrap();
        assert_eq!(session.export(Variant::Adfgx).unwrap(), SEED_25);
        assert!(session.matrix(Variant::Adfgvx).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, path) = setup_test_config();
        Settings::default().save_to(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
