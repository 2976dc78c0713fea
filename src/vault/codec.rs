//! Store codec: mapping <-> JSON plaintext <-> ciphertext file.
//!
//! The plaintext is a compact JSON object whose key order is the
//! mapping's insertion order.  The ciphertext is whatever
//! `crypto::encrypt` produces; this layer never looks inside it.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::crypto::{self, Argon2Params};
use crate::errors::{Result, SafeboxError};

/// The decrypted vault: string keys to string values, in insertion order.
pub type Mapping = IndexMap<String, String>;

/// Encode a mapping as JSON bytes.
///
/// Deterministic for a given mapping (same entries, same order).
pub fn serialize(mapping: &Mapping) -> Result<Vec<u8>> {
    serde_json::to_vec(mapping).map_err(|e| SafeboxError::SerializationError(e.to_string()))
}

/// Decode JSON bytes produced by `serialize`.
///
/// Anything other than a JSON object of string values is rejected.
pub fn deserialize(bytes: &[u8]) -> Result<Mapping> {
    serde_json::from_slice(bytes).map_err(|e| SafeboxError::MalformedContent(e.to_string()))
}

/// SHA-256 over a mapping's serialized form.
///
/// Two mappings have equal fingerprints iff they hold the same entries in
/// the same order.
#[derive(Debug, Clone)]
pub struct Fingerprint([u8; 32]);

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Fingerprint {}

pub fn fingerprint(mapping: &Mapping) -> Result<Fingerprint> {
    let bytes = serialize(mapping)?;
    Ok(Fingerprint(Sha256::digest(&bytes).into()))
}

/// Serialize, encrypt and atomically replace the file at `path`.
pub fn encrypt_and_write(
    path: &Path,
    password: &str,
    mapping: &Mapping,
    params: &Argon2Params,
) -> Result<()> {
    let plaintext = zeroize::Zeroizing::new(serialize(mapping)?);
    let ciphertext = crypto::encrypt(password, &plaintext, params)?;

    debug!(path = %path.display(), entries = mapping.len(), "writing vault");
    write_atomic(path, &ciphertext)
}

/// Read and decrypt the file at `path`.
///
/// A missing file is an empty vault; in that case `password` is never
/// called, so no prompt happens for a vault that does not exist yet.
pub fn read_and_decrypt<'a, F>(path: &Path, password: F) -> Result<Mapping>
where
    F: FnOnce() -> Result<&'a str>,
{
    let ciphertext = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "vault file absent, starting empty");
            return Ok(Mapping::new());
        }
        Err(e) => return Err(SafeboxError::file_io(path, e)),
    };

    debug!(path = %path.display(), bytes = ciphertext.len(), "reading vault");
    let plaintext = zeroize::Zeroizing::new(crypto::decrypt(password()?, &ciphertext)?);
    deserialize(&plaintext)
}

/// Write `data` to a sibling temp file, sync it, rename it over `path`,
/// then sync the directory so the rename itself is durable.  Readers see
/// either the old file or the new one, never a mix.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let tmp_path = temp_path_for(path);

    let result = write_synced(&tmp_path, data)
        .and_then(|()| fs::rename(&tmp_path, path))
        .map_err(|e| SafeboxError::file_io(path, e));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result?;

    let dir = parent_dir(path);
    sync_dir(dir).map_err(|e| SafeboxError::file_io(dir, e))
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

// Directory handles cannot be synced this way off Unix.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Directory containing `path`; a bare file name lives in `.`.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // The vault is only ever meant for its owner.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

/// `.<name>.<pid>.tmp` in the same directory, so the rename stays on one
/// filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let parent = parent_dir(path);
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    parent.join(format!(".{name}.{}.tmp", std::process::id()))
}
