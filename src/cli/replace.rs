//! Replace command - patch the style block in place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::ReplaceArgs;
use crate::patch::{self, PatchError};
use crate::utils::fs::write_atomic;
use crate::{debug, log, logger};

/// Canonical status line for a successful replacement.
const MSG_REPLACED: &str = "Successfully replaced style block with link.";

/// Canonical status line when no replaceable block exists.
const MSG_NOT_FOUND: &str = "Could not find style block.";

/// Run the replace command
///
/// Reads the file, locates the first style block, and rewrites the file
/// with the block replaced by a stylesheet link. A missing or unclosed
/// block leaves the file untouched and reports not-found; more than one
/// block is rejected.
pub fn run_replace(args: &ReplaceArgs) -> Result<()> {
    logger::set_verbose(args.verbose);

    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read `{}`", args.path.display()))?;

    let block = match patch::locate_style_block(&text) {
        Ok(Some(block)) => block,
        Ok(None) => {
            debug!("replace"; "no `<style>` marker in {}", args.path.display());
            log!("replace"; "{}", MSG_NOT_FOUND);
            return Ok(());
        }
        Err(PatchError::UnclosedBlock) => {
            debug!("replace"; "`<style>` is never closed in {}", args.path.display());
            log!("replace"; "{}", MSG_NOT_FOUND);
            return Ok(());
        }
        Err(e @ PatchError::MultipleBlocks) => {
            bail!("`{}`: {}", args.path.display(), e);
        }
    };

    debug!("replace"; "style block at bytes {}..{} ({} bytes of css)",
        block.start, block.end, block.inner(&text).len());

    let patched = patch::apply(&text, block, &args.href);

    if args.dry_run {
        print!("{patched}");
        return Ok(());
    }

    if args.extract {
        extract_css(&args.path, &args.href, block.inner(&text))?;
    }

    write_atomic(&args.path, &patched)?;
    log!("replace"; "{}", MSG_REPLACED);
    Ok(())
}

/// Save the removed inline CSS at the href target, next to the HTML file.
fn extract_css(html: &Path, href: &str, css: &str) -> Result<()> {
    if href.contains("://") || href.starts_with('/') {
        bail!("--extract requires a relative href, got `{href}`");
    }

    let target = html.parent().unwrap_or(Path::new(".")).join(href);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }

    write_atomic(&target, css)?;
    debug!("replace"; "extracted {} bytes of css to {}", css.len(), target.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
