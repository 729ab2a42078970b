//! `fetch` command: compile one asset to stdout.

use crate::asset::AssetPipeline;
use crate::debug;
use anyhow::{Context, Result};
use std::io::Write;

/// Compile `filename` and write the result to `out`.
pub fn fetch_asset(pipeline: &AssetPipeline, filename: &str, out: &mut impl Write) -> Result<()> {
    let content = pipeline
        .fetch(filename)
        .with_context(|| format!("fetch {filename}"))?;
    debug!("fetch"; "{} ({} bytes)", filename, content.len());

    out.write_all(content.as_bytes())?;
    out.flush()?;
    Ok(())
}
