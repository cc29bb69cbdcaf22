//! Command-line interface definitions.
//!
//! Defines the argument parser and subcommands using clap's derive API.
//! Each subcommand corresponds to a distinct operation: verifying links in
//! Chinese documentation, rewriting them, or listing scan targets.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check and fix links in Chinese Markdown documentation variants.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report links in Chinese docs that should point at Chinese variants.
    /// Read-only; exits 1 when any issue is found.
    Check {
        /// Documentation root. Defaults to ./docs.
        #[arg(long)]
        root: Option<PathBuf>,

        /// Glob patterns for entries to exclude (e.g., "drafts", "*.tmp.md").
        /// Entries starting with `.` or `_` are always excluded.
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Emit JSON instead of human-readable output.
        #[arg(long)]
        json: bool,

        /// Print additional diagnostics to stderr.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rewrite links in Chinese docs to point at Chinese variants.
    Fix {
        /// Show what would be changed without writing any file.
        #[arg(long)]
        dry_run: bool,

        /// Interactively confirm each file's changes before writing.
        #[arg(short, long)]
        interactive: bool,

        /// Documentation root. Defaults to ./docs.
        #[arg(long)]
        root: Option<PathBuf>,

        /// Glob patterns for entries to exclude (e.g., "drafts", "*.tmp.md").
        /// Entries starting with `.` or `_` are always excluded.
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Print additional diagnostics to stderr.
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the Chinese documentation files that would be processed.
    Scan {
        /// Documentation root. Defaults to ./docs.
        #[arg(long)]
        root: Option<PathBuf>,

        /// Glob patterns for entries to exclude (e.g., "drafts", "*.tmp.md").
        /// By default, entries starting with `.` or `_` are excluded.
        #[arg(short, long)]
        exclude: Vec<String>,
    },
}
