//! Environment readiness check.

use std::io::Write;

use anyhow::Result;

use factsift::renderer::find_chromium;

use crate::config::RuntimeOpts;

/// Report browser and model settings. Returns whether the setup looks usable.
pub fn run<W: Write>(opts: &RuntimeOpts, out: &mut W) -> Result<bool> {
    writeln!(out, "factsift doctor")?;
    writeln!(out, "===============")?;
    writeln!(out)?;

    let chromium = find_chromium(opts.chromium_path.as_deref());
    match &chromium {
        Some(path) => writeln!(out, "[OK] Browser found: {}", path.display())?,
        None => writeln!(
            out,
            "[!!] Browser NOT found. Install Chrome/Chromium or set FACTSIFT_CHROMIUM_PATH."
        )?,
    }

    let answer = opts.answer_config();
    writeln!(out, "[OK] Model: {} via {}", answer.model, answer.api_base)?;
    if answer.api_key.is_some() {
        writeln!(out, "[OK] API key configured")?;
    } else {
        writeln!(out, "[??] No API key (set GROQ_API_KEY unless the endpoint needs none)")?;
    }

    writeln!(out, "[OK] Chunk size: {} chars", opts.chunk_size)?;
    if opts.chunk_size == 0 {
        writeln!(out, "[!!] Chunk size must be at least 1")?;
    }

    writeln!(out)?;
    let ready = chromium.is_some() && opts.chunk_size > 0;
    writeln!(out, "Status: {}", if ready { "READY" } else { "NOT READY" })?;
    Ok(ready)
}
