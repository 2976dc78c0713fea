//! `safebox delete`: remove keys; the file is only rewritten if one existed.

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;
use crate::vault::WriteOutcome;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, keys: &[String]) -> Result<()> {
    let mut vault = open_vault(cli)?;
    let outcome = vault.delete(keys)?;

    if cli.verbose {
        match outcome {
            WriteOutcome::Written => {
                output::success(&format!("Updated {}", vault.path().display()));
            }
            WriteOutcome::Unchanged => {
                output::info("No matching keys; vault left unchanged.");
            }
        }
    }

    Ok(())
}
