// ============================================================================
// mpf-component-cli/src/output.rs
// ============================================================================
//
// OUTPUT: JSON results on stdout
//
// Logs go to stderr; stdout carries only JSON.

use crate::error::CliResult;
use serde::Serialize;
use std::io::{self, Write};

/// Writes `value` to stdout as pretty-printed JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
