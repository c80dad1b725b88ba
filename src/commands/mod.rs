//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod config;
mod decrypt;
mod encrypt;
mod matrix;

pub use config::ConfigCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use matrix::MatrixCommand;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use adfgvx::{CipherSession, Language, Settings, Variant};

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Explicit settings file, overriding `~/.adfgvx/config.toml`.
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Context {
    pub fn settings_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Settings::default_path().context("Failed to locate settings file"),
        }
    }

    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.settings_path()?;
        Settings::load_from(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<PathBuf> {
        let path = self.settings_path()?;
        settings
            .save_to(&path)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
        Ok(path)
    }
}

/// Trait for command execution - Strategy pattern.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, ctx: &Context) -> Result<()>;
}

/// Arguments shared by `encrypt` and `decrypt`.
#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Transposition keyword
    #[arg(short, long)]
    pub keyword: String,

    /// Cipher variant: adfgx (5x5) or adfgvx (6x6)
    #[arg(long, default_value = "adfgvx")]
    pub variant: Variant,

    /// Language profile for ADFGX: en (J -> I) or cs (Q -> KJU)
    /// Defaults to the language in the settings file
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Matrix data to use instead of the saved matrix
    #[arg(short, long)]
    pub matrix: Option<String>,

    /// Input text (reads from stdin if not provided)
    pub text: Option<String>,
}

impl CipherArgs {
    /// Builds a session from saved settings and applies the overrides.
    pub fn session(&self, ctx: &Context) -> Result<CipherSession> {
        let mut session = ctx
            .load_settings()?
            .to_session()
            .context("Failed to restore saved matrices")?;

        if let Some(language) = self.language {
            session.set_language(language);
        }
        if let Some(data) = &self.matrix {
            session.generate(self.variant, Some(data))?;
        }

        if ctx.verbose {
            if let Ok(matrix) = session.matrix(self.variant) {
                eprintln!("Using {} matrix:", self.variant);
                eprint!("{}", matrix.render_table());
            }
        }

        Ok(session)
    }

    /// The input text, from the argument or stdin.
    pub fn input(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => read_stdin(),
        }
    }
}

/// Reads all of stdin.
pub fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read from stdin")?;
    Ok(input)
}
