//! Cryptographic primitives for Safebox.
//!
//! This module provides:
//! - Argon2id password-based key derivation (`kdf`)
//! - AES-256-GCM sealing under a derived key (`encryption`)
//! - The password-keyed envelope the vault file is made of (`envelope`)

pub mod encryption;
pub mod envelope;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, Argon2Params};
pub use envelope::{decrypt, encrypt};
pub use kdf::Argon2Params;
pub use keys::DerivedKey;
