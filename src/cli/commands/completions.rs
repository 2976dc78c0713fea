//! `safebox completions <SHELL>`: print a completion script for the
//! command tree (`list`, `get`, `set`, `delete`, and the global flags).

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout().lock())?;
    Ok(())
}

/// Render the completion script for `shell` into `out`.
pub fn write_script<W: Write>(shell: Shell, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()
}
