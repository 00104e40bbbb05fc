//! Check command - report whether a file has a replaceable style block.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::log;
use crate::patch;

/// Run the check command
///
/// Never modifies the file. Exits non-zero when no single replaceable
/// block is present, so scripts can branch on the result.
pub fn run_check(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    match patch::locate_style_block(&text) {
        Ok(Some(block)) => {
            log!("check"; "style block found ({} bytes of inline css)",
                block.inner(&text).len());
            Ok(())
        }
        Ok(None) => {
            log!("check"; "Could not find style block.");
            std::process::exit(1);
        }
        Err(e) => {
            log!("check"; "{}", e);
            std::process::exit(1);
        }
    }
}
