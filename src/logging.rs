//! Diagnostic logging via `tracing`.
//!
//! Stdout carries vault data (`list`, `get`), so all log output goes to
//! stderr.  `RUST_LOG` is honored unless `--verbose` is given.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.  Safe to call more than once; later
/// calls are ignored.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("safebox=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("safebox=warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
