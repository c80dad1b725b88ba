//! Matrix commands - generate, import and show substitution squares.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use adfgvx::{CipherSession, Language, Matrix, Variant};

use super::{CommandExecutor, Context};

/// Generate, import or show the substitution matrix.
#[derive(Args, Debug)]
pub struct MatrixCommand {
    #[command(subcommand)]
    pub action: MatrixAction,
}

#[derive(Subcommand, Debug)]
pub enum MatrixAction {
    /// Generate a new matrix (random, from data, or from a passphrase)
    Generate {
        /// Cipher variant: adfgx (5x5) or adfgvx (6x6)
        #[arg(long, default_value = "adfgvx")]
        variant: Variant,

        /// Language profile for ADFGX: en (J -> I) or cs (Q -> KJU)
        #[arg(short, long)]
        language: Option<Language>,

        /// Build the matrix from this data instead of randomly
        /// Needs exactly 25 (ADFGX) or 36 (ADFGVX) unique usable characters
        #[arg(short, long, conflicts_with = "passphrase")]
        seed: Option<String>,

        /// Derive the matrix from a passphrase (same passphrase = same matrix)
        #[arg(short, long)]
        passphrase: Option<String>,

        /// Save as the current matrix in the settings file
        #[arg(long)]
        save: bool,
    },

    /// Show the saved matrix
    Show {
        /// Cipher variant: adfgx (5x5) or adfgvx (6x6)
        #[arg(long, default_value = "adfgvx")]
        variant: Variant,
    },
}

impl CommandExecutor for MatrixCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        match &self.action {
            MatrixAction::Generate {
                variant,
                language,
                seed,
                passphrase,
                save,
            } => generate(
                ctx,
                *variant,
                *language,
                seed.as_deref(),
                passphrase.as_deref(),
                *save,
            ),
            MatrixAction::Show { variant } => show(ctx, *variant),
        }
    }
}

fn generate(
    ctx: &Context,
    variant: Variant,
    language: Option<Language>,
    seed: Option<&str>,
    passphrase: Option<&str>,
    save: bool,
) -> Result<()> {
    let mut settings = ctx.load_settings()?;
    let language = language.unwrap_or(settings.language);
    let mut session = CipherSession::new(language);

    let matrix = match (seed, passphrase) {
        (Some(_), Some(_)) => bail!("--seed and --passphrase cannot be used together"),
        (_, Some(passphrase)) => session.generate_from_passphrase(variant, passphrase),
        (seed, None) => session.generate(variant, seed)?,
    };

    print_matrix(matrix);

    if save {
        settings.save_matrix(matrix);
        if variant == Variant::Adfgx {
            settings.language = language;
        }
        let path = ctx.save_settings(&settings)?;
        eprintln!("Saved {} matrix to {}", variant, path.display());
    } else if ctx.verbose {
        eprintln!("Not saved (use --save to keep it as the current matrix)");
    }

    Ok(())
}

fn show(ctx: &Context, variant: Variant) -> Result<()> {
    let session = ctx.load_settings()?.to_session()?;
    let matrix = session.matrix(variant)?;

    if ctx.verbose && variant == Variant::Adfgx {
        eprintln!("Language: {}", session.language());
    }
    print_matrix(matrix);
    Ok(())
}

fn print_matrix(matrix: &Matrix) {
    print!("{}", matrix.render_table());
    println!();
    println!("Matrix: {}", matrix);
}
