//! `safebox list`: print every `key=value` pair in stored order.

use std::io;

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut vault = open_vault(cli)?;
    let entries = vault.list()?;

    output::write_entries(&mut io::stdout().lock(), &entries)?;
    Ok(())
}
