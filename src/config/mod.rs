//! Configuration: `.safebox.toml` settings and environment overrides.

pub mod settings;

pub use settings::Settings;
