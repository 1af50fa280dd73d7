//! # modelcheck CLI
//!
//! Subcommand handlers for the `modelcheck` binary. Each handler writes its
//! report to the given writer and returns the process exit code.

use std::io::Write;

use anyhow::{Context, Result};

pub mod check;
pub mod load;
pub mod validate;

/// Runs `handler` against `out`, then flushes `out`. A failed flush is an
/// error even when the handler succeeded.
pub fn run_and_flush<W: Write>(out: &mut W, handler: impl FnOnce(&mut W) -> Result<u8>) -> Result<u8> {
    let code = handler(out)?;
    out.flush().context("failed to write output")?;
    Ok(code)
}

/// Process exit codes.
pub mod exit {
    /// Every object was valid, or the schema audit found nothing.
    pub const OK: u8 = 0;
    /// At least one object was invalid, or the audit reported findings.
    pub const INVALID: u8 = 1;
    /// No object was invalid but at least one could not be validated.
    pub const INDETERMINATE: u8 = 2;
    /// Bad command line, a file could not be read or parsed, output could
    /// not be written, or logging could not start.
    pub const ERROR: u8 = 3;
}
