//! ADFGVX - classical field ciphers on the command line.
//!
//! Generates substitution squares, and encrypts or decrypts messages with
//! the ADFGX (5×5) or ADFGVX (6×6) cipher.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{
    CommandExecutor, ConfigCommand, Context, DecryptCommand, EncryptCommand, MatrixCommand,
};

/// ADFGVX - classical field ciphers
///
/// Polybius-square substitution followed by keyed columnar transposition.
/// Historical cipher for study and puzzles; not secure against modern attacks.
#[derive(Parser)]
#[command(name = "adfgvx")]
#[command(version)]
#[command(about = "ADFGX and ADFGVX field ciphers")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logs and intermediate values on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (default: ~/.adfgvx/config.toml)
    #[arg(long, global = true, env = "ADFGVX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, import or show the substitution matrix
    Matrix(MatrixCommand),

    /// Encrypt a message
    Encrypt(EncryptCommand),

    /// Decrypt a message
    Decrypt(DecryptCommand),

    /// Show or change settings
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "adfgvx=debug" } else { "adfgvx=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context {
        config_path: cli.config,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Matrix(cmd) => cmd.execute(&ctx),
        Commands::Encrypt(cmd) => cmd.execute(&ctx),
        Commands::Decrypt(cmd) => cmd.execute(&ctx),
        Commands::Config(cmd) => cmd.execute(&ctx),
    }
}
