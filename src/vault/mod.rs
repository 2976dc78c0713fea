//! Vault module: the encrypted key-value store.
//!
//! This module provides:
//! - The mapping <-> plaintext <-> ciphertext codec (`codec`)
//! - The per-invocation password cache (`session`)
//! - `Vault`, which runs list/get/set/delete against a file (`controller`)

pub mod codec;
pub mod controller;
pub mod session;

// Re-export the most commonly used items.
pub use codec::{Fingerprint, Mapping};
pub use controller::{parse_assignments, Vault, WriteOutcome};
pub use session::{PasswordPrompt, Session};
