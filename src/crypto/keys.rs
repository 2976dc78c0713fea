//! Zeroize-on-drop holder for derived key material.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a derived AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// A 32-byte symmetric key that wipes its memory when dropped.
///
/// Produced by the KDF and consumed by the cipher; it never leaves the
/// `crypto` module as raw bytes except through `as_bytes`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// An all-zero key, to be filled in place by the KDF.
    pub(crate) fn zeroed() -> Self {
        Self {
            bytes: [0u8; KEY_LEN],
        }
    }

    /// Wrap existing key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; KEY_LEN] {
        &mut self.bytes
    }
}
