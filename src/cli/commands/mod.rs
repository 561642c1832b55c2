//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod catalog;
pub mod completions;
pub mod dispatcher;
pub mod report;
pub mod source;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use source::CatalogSource;
