//! Result output. Stdout carries exactly one JSON object per run.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Write `value` as a single line of compact JSON and flush.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
