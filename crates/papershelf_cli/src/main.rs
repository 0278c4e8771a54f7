//! `papershelf` command-line entry point.
//!
//! # Responsibility
//! - Parse flags, resolve configuration and start optional file logging.
//! - Render core view projections as plain text.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli)
}
