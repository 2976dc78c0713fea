use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::Argon2Params;
use crate::errors::{Result, SafeboxError};

/// Environment variable holding a pre-supplied vault password.
pub const PASSWORD_ENV: &str = "SAFEBOX_PASSWORD";

/// Environment variable overriding the vault file path.
pub const FILE_ENV: &str = "SAFEBOX_FILE";

/// Project-level configuration, loaded from `.safebox.toml`.
///
/// Every field has a sensible default so Safebox works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Vault file, relative to the project directory unless absolute.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Argon2 memory cost in KiB (default: 64 MB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 3).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 4).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_file() -> PathBuf {
    PathBuf::from("safe.box")
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MB
}

fn default_argon2_iterations() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: default_file(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".safebox.toml";

    /// Load settings from `<project_dir>/.safebox.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If it exists but cannot be parsed, or holds Argon2 parameters
    /// below the safe minimums, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| SafeboxError::file_io(&config_path, e))?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SafeboxError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.argon2_params().validate().map_err(|e| {
            SafeboxError::ConfigError(format!("{}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the vault file path.
    ///
    /// An explicit override (`--file` / `SAFEBOX_FILE`) wins over the
    /// configured `file`; relative paths are anchored at `project_dir`.
    pub fn vault_path(&self, project_dir: &Path, override_path: Option<&Path>) -> PathBuf {
        project_dir.join(override_path.unwrap_or(self.file.as_path()))
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
