use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in Safebox.
#[derive(Debug, Error)]
pub enum SafeboxError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong password and tampered ciphertext are deliberately the same error.
    #[error("Decryption failed: wrong password or corrupted vault file")]
    AuthenticationFailure,

    #[error("Invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Malformed vault content: {0}")]
    MalformedContent(String),

    #[error("Invalid assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),

    // --- IO errors ---
    #[error("{}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl SafeboxError {
    /// Attach the offending path to an I/O error.
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Safebox results.
pub type Result<T> = std::result::Result<T, SafeboxError>;
