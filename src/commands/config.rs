//! Config command - inspect and change persisted settings.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use adfgvx::Language;

use super::{CommandExecutor, Context};

/// Show or change settings.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the settings file location and contents
    Show,

    /// Set the default language profile for ADFGX
    SetLanguage {
        /// en (J -> I) or cs (Q -> KJU)
        language: Language,
    },
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        match &self.action {
            ConfigAction::Show => {
                let path = ctx.settings_path()?;
                let settings = ctx.load_settings()?;
                let content =
                    toml::to_string_pretty(&settings).context("Failed to serialize settings")?;

                println!("# {}", path.display());
                print!("{}", content);
            }
            ConfigAction::SetLanguage { language } => {
                let mut settings = ctx.load_settings()?;
                settings.language = *language;
                ctx.save_settings(&settings)?;
                println!("Default language set to {}", language);
                if settings.matrices.adfgx.is_some() {
                    eprintln!(
                        "Note: the saved ADFGX matrix may contain '{}'; regenerate it if encryption fails",
                        language.folded_letter()
                    );
                }
            }
        }
        Ok(())
    }
}
