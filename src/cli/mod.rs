//! Command-line interface for apiprogress.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CatalogArgs, Cli, Commands, CompletionsArgs, ReportArgs, SourceArgs};
pub use commands::{CatalogSource, Command, CommandDispatcher, CommandResult};
