//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ncpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path inside the mod root, usually the dropped new_commanders directory
    ///
    /// Exactly one is expected; the count is checked after parsing so a
    /// missing or extra path gets the usual packager message.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Author name (skips the prompt)
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Version string (skips the prompt)
    #[arg(short = 'm', long, value_name = "VERSION")]
    pub mod_version: Option<String>,

    /// Match exclusion paths on whole path components only
    #[arg(long)]
    pub strict_exclusions: bool,

    /// Show what would be packaged without writing the archive
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exit without waiting for a key press
    #[arg(long)]
    pub no_wait: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
