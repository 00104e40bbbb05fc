//! Filesystem helpers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::Builder as TempFileBuilder;

/// Write `contents` to `path` atomically.
///
/// Writes into a temporary file in the target's directory and renames it
/// over the target, so the target is never observed partially written.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = TempFileBuilder::new()
        .prefix(".unstyle_")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temporary file in `{}`", dir.display()))?;

    tmp.write_all(contents.as_bytes())
        .context("failed to write temporary file")?;

    tmp.persist(path)
        .with_context(|| format!("failed to replace `{}`", path.display()))?;

    Ok(())
}
