//! Password-based authenticated encryption of an opaque blob.
//!
//! This is the whole contract the vault relies on: `encrypt` and
//! `decrypt`, keyed by a password.  Everything needed to re-derive the
//! key travels with the ciphertext:
//!
//! ```text
//! [version: 1][memory_kib: 4 LE][iterations: 4 LE][parallelism: 4 LE][salt: 16][nonce: 12][ciphertext + tag]
//! ```

use super::encryption::{open, seal, NONCE_LEN, TAG_LEN};
use super::kdf::{derive_key, generate_salt, Argon2Params, SALT_LEN};
use crate::errors::{Result, SafeboxError};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Fixed-size prefix: version + three u32 cost parameters + salt.
const HEADER_LEN: usize = 1 + 4 + 4 + 4 + SALT_LEN;

/// Encrypt `plaintext` under `password`.
///
/// A fresh salt and nonce are drawn on every call, so encrypting the same
/// plaintext twice yields different bytes.
pub fn encrypt(password: &str, plaintext: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    let salt = generate_salt();
    let key = derive_key(password.as_bytes(), &salt, params)?;
    let sealed = seal(&key, plaintext)?;

    let mut out = Vec::with_capacity(HEADER_LEN + sealed.len());
    out.push(ENVELOPE_VERSION);
    out.extend_from_slice(&params.memory_kib.to_le_bytes());
    out.extend_from_slice(&params.iterations.to_le_bytes());
    out.extend_from_slice(&params.parallelism.to_le_bytes());
    out.extend_from_slice(&salt);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Decrypt an envelope produced by `encrypt`.
///
/// Fails with `InvalidCiphertext` if the bytes cannot be an envelope at
/// all, and with `AuthenticationFailure` if the password is wrong or the
/// bytes were altered.
pub fn decrypt(password: &str, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < HEADER_LEN + NONCE_LEN + TAG_LEN {
        return Err(SafeboxError::InvalidCiphertext(
            "file too small to be a vault".into(),
        ));
    }

    let version = ciphertext[0];
    if version != ENVELOPE_VERSION {
        return Err(SafeboxError::InvalidCiphertext(format!(
            "unsupported version {version}, expected {ENVELOPE_VERSION}"
        )));
    }

    let params = Argon2Params {
        memory_kib: read_u32(ciphertext, 1)?,
        iterations: read_u32(ciphertext, 5)?,
        parallelism: read_u32(ciphertext, 9)?,
    };
    params
        .validate()
        .map_err(|e| SafeboxError::InvalidCiphertext(format!("stored KDF params: {e}")))?;

    let (header, sealed) = ciphertext.split_at(HEADER_LEN);
    let salt = &header[HEADER_LEN - SALT_LEN..];

    let key = derive_key(password.as_bytes(), salt, &params)?;
    open(&key, sealed)
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let bytes: [u8; 4] = data
        .get(offset..offset + 4)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| SafeboxError::InvalidCiphertext("truncated header".into()))?;
    Ok(u32::from_le_bytes(bytes))
}
