//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::patch::DEFAULT_HREF;

/// Unstyle CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replace the first inline style block with a stylesheet link
    #[command(visible_alias = "r")]
    Replace {
        #[command(flatten)]
        args: ReplaceArgs,
    },

    /// Check whether a file contains a replaceable style block
    #[command(visible_alias = "c")]
    Check {
        /// HTML file to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },
}

/// Replace command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct ReplaceArgs {
    /// HTML file to patch in place
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// Stylesheet href for the generated link tag
    #[arg(long, default_value = DEFAULT_HREF)]
    pub href: String,

    /// Save the removed inline CSS to the stylesheet path
    ///
    /// The href is resolved relative to the HTML file's directory, so the
    /// generated link points at the extracted file. Requires a relative href.
    #[arg(short = 'x', long)]
    pub extract: bool,

    /// Print the patched document to stdout instead of writing
    #[arg(short, long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_replace(&self) -> bool {
        matches!(self.command, Commands::Replace { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}
