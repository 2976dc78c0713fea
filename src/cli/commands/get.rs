//! `safebox get`: print a single value, or nothing if the key is absent.

use std::io::{self, IsTerminal};

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, key: &str) -> Result<()> {
    let mut vault = open_vault(cli)?;

    if let Some(value) = vault.get(key)? {
        let stdout = io::stdout();
        let newline = stdout.is_terminal();
        output::write_value(&mut stdout.lock(), &value, newline)?;
    }

    Ok(())
}
