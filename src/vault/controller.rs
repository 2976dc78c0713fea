//! The read-modify-write cycle behind `list`, `get`, `set` and `delete`.
//!
//! Every operation loads the mapping fresh from disk (or starts empty),
//! works on it in memory, and writes it back only when the operation's
//! write policy says so.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::codec::{self, Fingerprint, Mapping};
use super::session::Session;
use crate::crypto::Argon2Params;
use crate::errors::{Result, SafeboxError};

/// Whether an operation rewrote the vault file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// A vault file plus the session used to unlock it.
#[derive(Debug)]
pub struct Vault {
    path: PathBuf,
    params: Argon2Params,
    session: Session,
}

impl Vault {
    pub fn new(path: impl Into<PathBuf>, params: Argon2Params, session: Session) -> Self {
        Self {
            path: path.into(),
            params,
            session,
        }
    }

    /// All entries in stored order.
    pub fn list(&mut self) -> Result<Mapping> {
        self.load()
    }

    /// The value stored under `key`, if any.  An absent key is not an error.
    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.shift_remove(key))
    }

    /// Apply `KEY=VALUE` assignments.
    ///
    /// Existing keys keep their position; new keys are appended.  If every
    /// assignment repeats the stored value the file is left alone.
    pub fn set<S: AsRef<str>>(&mut self, assignments: &[S]) -> Result<WriteOutcome> {
        let updates = parse_assignments(assignments)?;

        let mut mapping = self.load()?;
        let before = codec::fingerprint(&mapping)?;
        mapping.extend(updates);

        self.store_if_changed(&mapping, &before, "set")
    }

    /// Remove `keys`.  Absent keys are ignored; if none were present the
    /// file is left alone.
    pub fn delete<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<WriteOutcome> {
        let mut mapping = self.load()?;
        let before = codec::fingerprint(&mapping)?;

        for key in keys {
            mapping.shift_remove(key.as_ref());
        }

        self.store_if_changed(&mapping, &before, "delete")
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The session, e.g. to check whether a prompt happened.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn load(&mut self) -> Result<Mapping> {
        let session = &mut self.session;
        codec::read_and_decrypt(&self.path, move || Session::password(session))
    }

    fn store_if_changed(
        &mut self,
        mapping: &Mapping,
        before: &Fingerprint,
        op: &str,
    ) -> Result<WriteOutcome> {
        if codec::fingerprint(mapping)? == *before {
            debug!(op, "no net change, leaving vault file untouched");
            return Ok(WriteOutcome::Unchanged);
        }

        let password = self.session.password()?;
        codec::encrypt_and_write(&self.path, password, mapping, &self.params)?;
        Ok(WriteOutcome::Written)
    }
}

/// Turn `KEY=VALUE` arguments into an ordered update mapping.
///
/// Only the first `=` separates key from value.  A later assignment to
/// the same key overwrites an earlier one.
pub fn parse_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Mapping> {
    let mut updates = Mapping::with_capacity(assignments.len());
    for raw in assignments {
        let raw = raw.as_ref();
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| SafeboxError::InvalidAssignment(raw.to_string()))?;
        updates.insert(key.to_string(), value.to_string());
    }
    Ok(updates)
}
