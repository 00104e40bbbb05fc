//! Locating the style block by literal marker search.

use thiserror::Error;

use super::{STYLE_CLOSE, STYLE_OPEN};

/// Errors from locating a style block
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatchError {
    /// Open marker present but never closed afterwards
    #[error("found `<style>` without a matching `</style>` after it")]
    UnclosedBlock,

    /// More than one style block in the document
    #[error("multiple style blocks found, only a single block is supported")]
    MultipleBlocks,
}

/// Byte span of a located style block within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBlock {
    /// Offset of the first byte of the open marker.
    pub start: usize,
    /// Offset just past the last byte of the close marker.
    pub end: usize,
}

impl StyleBlock {
    /// The CSS text strictly between the two markers.
    pub fn inner<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + STYLE_OPEN.len()..self.end - STYLE_CLOSE.len()]
    }
}

/// Locate the first style block in `text`.
///
/// The close-marker search starts at the end of the open marker, so a stray
/// `</style>` earlier in the document is ignored. Returns `Ok(None)` when
/// the document has no open marker at all.
pub fn locate_style_block(text: &str) -> Result<Option<StyleBlock>, PatchError> {
    let Some(start) = text.find(STYLE_OPEN) else {
        return Ok(None);
    };

    let body = start + STYLE_OPEN.len();
    let close = text[body..]
        .find(STYLE_CLOSE)
        .ok_or(PatchError::UnclosedBlock)?;
    let end = body + close + STYLE_CLOSE.len();

    if text[end..].contains(STYLE_OPEN) {
        return Err(PatchError::MultipleBlocks);
    }

    Ok(Some(StyleBlock { start, end }))
}

// ============================================================================
// Tests
// ============================================================================
