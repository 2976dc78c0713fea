//! AES-256-GCM authenticated encryption under a derived key.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext; `open` splits it back out.
//!
//! Layout of the sealed buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::keys::DerivedKey;
use crate::errors::{Result, SafeboxError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt and authenticate `plaintext`, returning `nonce || ciphertext`.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SafeboxError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| SafeboxError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Verify and decrypt a buffer produced by `seal`.
///
/// A buffer too short to hold a nonce and tag is structurally invalid;
/// a tag mismatch is an authentication failure.
pub fn open(key: &DerivedKey, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(SafeboxError::InvalidCiphertext(format!(
            "sealed payload is {} bytes, need at least {}",
            sealed.len(),
            NONCE_LEN + TAG_LEN
        )));
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SafeboxError::InvalidCiphertext(format!("invalid key length: {e}")))?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SafeboxError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let key = DerivedKey::new([0xAB; 32]);
        let sealed = seal(&key, b"{\"a\":\"1\"}").unwrap();
        assert_eq!(sealed.len(), NONCE_LEN + 9 + TAG_LEN);
        assert_eq!(open(&key, &sealed).unwrap(), b"{\"a\":\"1\"}");
    }

    #[test]
    fn nonce_is_fresh_per_call() {
        let key = DerivedKey::new([0xCD; 32]);
        assert_ne!(seal(&key, b"same").unwrap(), seal(&key, b"same").unwrap());
    }

    #[test]
    fn wrong_key_is_authentication_failure() {
        let sealed = seal(&DerivedKey::new([0x11; 32]), b"secret").unwrap();
        assert!(matches!(
            open(&DerivedKey::new([0x22; 32]), &sealed),
            Err(SafeboxError::AuthenticationFailure)
        ));
    }

    #[test]
    fn short_buffer_is_invalid_ciphertext() {
        let key = DerivedKey::new([0xAA; 32]);
        assert!(matches!(
            open(&key, &[0u8; 5]),
            Err(SafeboxError::InvalidCiphertext(_))
        ));
    }
}
