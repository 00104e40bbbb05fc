//! Unstyle - replace inline style blocks with external stylesheet links.

mod cli;
mod logger;
mod patch;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Replace { args } => cli::replace::run_replace(args),
        Commands::Check { path } => cli::check::run_check(path),
    }
}
