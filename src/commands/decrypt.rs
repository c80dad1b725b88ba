//! Decrypt command.

use anyhow::Result;
use clap::Args;

use super::{CipherArgs, CommandExecutor, Context};

/// Decrypt a ciphertext made of space-separated column blocks.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    #[command(flatten)]
    pub cipher: CipherArgs,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let session = self.cipher.session(ctx)?;
        let ciphertext = self.cipher.input()?;

        if ctx.verbose {
            eprintln!("Ciphertext has {} blocks", ciphertext.split_whitespace().count());
        }

        let plaintext = session.decrypt(self.cipher.variant, &ciphertext, &self.cipher.keyword)?;
        println!("{}", plaintext);
        Ok(())
    }
}
