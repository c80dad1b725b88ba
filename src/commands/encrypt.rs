//! Encrypt command.

use anyhow::Result;
use clap::Args;

use adfgvx::normalize_plaintext;

use super::{CipherArgs, CommandExecutor, Context};

/// Encrypt a message with the current (or given) matrix and a keyword.
///
/// Spaces are kept as placeholder words. With ADFGX, digits are spelled out
/// and the language letter is folded, so decryption returns the normalized
/// text rather than the exact input.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    #[command(flatten)]
    pub cipher: CipherArgs,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let session = self.cipher.session(ctx)?;
        let plaintext = self.cipher.input()?;

        let ciphertext = session.encrypt(self.cipher.variant, &plaintext, &self.cipher.keyword)?;

        if ctx.verbose {
            let normalized = normalize_plaintext(&plaintext, self.cipher.variant, session.language());
            eprintln!("Normalized plaintext: {}", normalized);
            eprintln!(
                "Encoded {} symbols into {} letters",
                normalized.len(),
                normalized.len() * 2
            );
        }

        println!("{}", ciphertext);
        Ok(())
    }
}
