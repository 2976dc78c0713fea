//! Password-based key derivation using Argon2id.
//!
//! Argon2id is memory-hard, which makes offline guessing against a stolen
//! vault file expensive.  Parameters come from `.safebox.toml` (or the
//! defaults below) when encrypting, and from the envelope when decrypting.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use super::keys::{DerivedKey, KEY_LEN};
use crate::errors::{Result, SafeboxError};

/// Length of the per-file salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Minimum safe memory cost in KiB (8 MB).
pub const MIN_MEMORY_KIB: u32 = 8_192;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Params {
    /// Reject parameters weak enough to make the KDF pointless.
    pub fn validate(&self) -> Result<()> {
        if self.memory_kib < MIN_MEMORY_KIB {
            return Err(SafeboxError::KeyDerivationFailed(format!(
                "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
                self.memory_kib
            )));
        }
        if self.iterations < 1 {
            return Err(SafeboxError::KeyDerivationFailed(
                "Argon2 iterations must be at least 1".into(),
            ));
        }
        if self.parallelism < 1 {
            return Err(SafeboxError::KeyDerivationFailed(
                "Argon2 parallelism must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt + params always produce the same key.
pub fn derive_key(password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<DerivedKey> {
    params.validate()?;

    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| SafeboxError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = DerivedKey::zeroed();
    argon2
        .hash_password_into(password, salt, key.as_mut_bytes())
        .map_err(|e| SafeboxError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;

    Ok(key)
}

/// Generate a random salt from the thread-local CSPRNG.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
