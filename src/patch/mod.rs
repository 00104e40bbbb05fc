//! Style block location and rewriting.
//!
//! The core transformation: find the first inline `<style>...</style>`
//! region by literal substring search and splice a stylesheet link in its
//! place. Markers are opaque character sequences, not parsed markup.

mod locate;
mod rewrite;

pub use locate::{PatchError, StyleBlock, locate_style_block};
pub use rewrite::{apply, link_tag};

/// Literal open marker of an inline style block.
pub const STYLE_OPEN: &str = "<style>";

/// Literal close marker of an inline style block.
pub const STYLE_CLOSE: &str = "</style>";

/// Default stylesheet href when none is given on the command line.
pub const DEFAULT_HREF: &str = "css/styles.css";
