//! JSON output for CLI commands

use std::io::Write;

use serde::Serialize;

use super::errors::CliResult;

/// Write a value as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
