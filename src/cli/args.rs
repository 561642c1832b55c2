//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Scrape an API documentation page and report SDK implementation progress.
#[derive(Debug, Parser)]
#[command(name = "apiprogress")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./apiprogress.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show per-category detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors and command output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the Markdown progress report (default if no command specified)
    Report(ReportArgs),

    /// Print the scraped method catalog
    Catalog(CatalogArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where the documentation page comes from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Documentation page URL
    #[arg(long, env = "APIPROGRESS_URL")]
    pub url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", env = "APIPROGRESS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Parse a saved copy of the documentation page instead of fetching it (takes precedence over --url)
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// File listing implemented method names, one per line
    #[arg(short, long, value_name = "FILE")]
    pub implemented: Option<PathBuf>,

    /// Report output path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the report to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `catalog` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
