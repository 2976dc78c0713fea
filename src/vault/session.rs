//! Per-invocation password session.
//!
//! A `Session` resolves the vault password at most once: either it was
//! supplied up front (environment variable), or the first operation that
//! actually needs it triggers a single prompt.  The result is cached for
//! the rest of the invocation and wiped from memory on drop.

use zeroize::Zeroizing;

use crate::errors::Result;

/// Something that can ask the user for a password.
pub trait PasswordPrompt {
    fn prompt(&mut self) -> Result<Zeroizing<String>>;
}

/// Holds the resolved password for one invocation.
pub struct Session {
    password: Option<Zeroizing<String>>,
    prompted: bool,
    prompter: Box<dyn PasswordPrompt>,
}

impl Session {
    /// Start a session.  `preset` is used as-is when present; otherwise
    /// `prompter` is consulted the first time a password is needed.
    pub fn new(preset: Option<Zeroizing<String>>, prompter: Box<dyn PasswordPrompt>) -> Self {
        Self {
            password: preset,
            prompted: false,
            prompter,
        }
    }

    /// The password, prompting for it on first use if none was preset.
    pub fn password(&mut self) -> Result<&str> {
        let pw = match &mut self.password {
            Some(pw) => pw,
            slot => {
                let typed = self.prompter.prompt()?;
                self.prompted = true;
                slot.insert(typed)
            }
        };
        Ok(pw.as_str())
    }

    /// Whether this session had to ask the user.
    pub fn prompted(&self) -> bool {
        self.prompted
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("prompted", &self.prompted)
            .finish_non_exhaustive()
    }
}
