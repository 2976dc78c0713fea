//! `safebox set`: add or update one or more keys.

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;
use crate::vault::WriteOutcome;

/// Execute the `set` command.
pub fn execute(cli: &Cli, assignments: &[String]) -> Result<()> {
    let mut vault = open_vault(cli)?;
    let outcome = vault.set(assignments)?;

    if cli.verbose {
        match outcome {
            WriteOutcome::Written => {
                output::success(&format!(
                    "Wrote {} key(s) to {}",
                    assignments.len(),
                    vault.path().display()
                ));
            }
            WriteOutcome::Unchanged => {
                output::info("Values unchanged; vault left untouched.");
            }
        }
    }

    Ok(())
}
