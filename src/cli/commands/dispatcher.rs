//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ReportArgs};
use crate::config::ProgressConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ProgressConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the loaded configuration.
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand the report command runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Report(args)) => {
                let cmd = super::report::ReportCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Catalog(args)) => {
                let cmd = super::catalog::CatalogCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::report::ReportCommand::new(self.config.clone(), ReportArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn dispatches_completions() {
        let cli = Cli::try_parse_from(["apiprogress", "completions", "bash"]).unwrap();
        let dispatcher = CommandDispatcher::new(ProgressConfig::default());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.outputs().concat().contains("apiprogress"));
    }

    #[test]
    fn default_command_is_report() {
        let cli = Cli::try_parse_from(["apiprogress"]).unwrap();
        let dispatcher = CommandDispatcher::new(ProgressConfig::default());

        let err = dispatcher.dispatch(&cli, &mut MockUI::new()).unwrap_err();

        assert!(matches!(err, crate::error::ProgressError::ImplementedListMissing));
    }
}
