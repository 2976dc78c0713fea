//! Terminal output helpers.
//!
//! Vault data goes to stdout through the `write_*` functions so it can be
//! piped; status and errors go to stderr with consistent styling.

use std::io::{self, Write};

use console::style;

use crate::vault::Mapping;

/// Print a green success message on stderr: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message on stderr: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a blue info message on stderr: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Write one `key=value` line per entry, in mapping order.
pub fn write_entries<W: Write>(out: &mut W, entries: &Mapping) -> io::Result<()> {
    for (key, value) in entries {
        writeln!(out, "{key}={value}")?;
    }
    out.flush()
}

/// Write a single value, with a trailing newline only if asked for.
///
/// `get` asks for one when stdout is a terminal, so that
/// `$(safebox get KEY)` captures the value byte-for-byte.
pub fn write_value<W: Write>(out: &mut W, value: &str, newline: bool) -> io::Result<()> {
    out.write_all(value.as_bytes())?;
    if newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}
