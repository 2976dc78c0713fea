//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use zeroize::Zeroizing;

use crate::config::settings::{FILE_ENV, PASSWORD_ENV};
use crate::config::Settings;
use crate::errors::{Result, SafeboxError};
use crate::vault::{PasswordPrompt, Session, Vault};

/// Safebox: a password-protected key-value vault in a single file.
#[derive(Parser)]
#[command(
    name = "safebox",
    about = "Password-protected key-value vault in a single encrypted file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Safebox file (default: safe.box)
    #[arg(short, long, env = FILE_ENV, global = true, value_name = "SAFEBOX")]
    pub file: Option<PathBuf>,

    /// Log vault activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Lists all keys and their values
    List,

    /// Prints the given key to STDOUT
    Get {
        /// Key to look up
        key: String,
    },

    /// Sets the value of the given keys
    Set {
        /// Assignments; only the first `=` separates key from value
        #[arg(value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },

    /// Delete the given keys
    Delete {
        /// Keys to remove (absent keys are ignored)
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Interactive password prompt on the terminal (stderr, no echo).
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&mut self) -> Result<Zeroizing<String>> {
        let pw = dialoguer::Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| SafeboxError::CommandFailed(format!("password prompt: {e}")))?;
        Ok(Zeroizing::new(pw))
    }
}

/// The password from `SAFEBOX_PASSWORD`, if set.
///
/// An empty value counts: the prompt accepts an empty password too, so a
/// vault locked with one must stay usable without a terminal.
pub fn preset_password() -> Option<Zeroizing<String>> {
    std::env::var(PASSWORD_ENV).ok().map(Zeroizing::new)
}

/// Build the vault handle for this invocation from settings, flags and
/// environment.
pub fn open_vault(cli: &Cli) -> Result<Vault> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = settings.vault_path(&cwd, cli.file.as_deref());

    let session = Session::new(preset_password(), Box::new(TerminalPrompt));
    Ok(Vault::new(path, settings.argon2_params(), session))
}
