//! Shell completions generation.
//!
//! The `apiprogress completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "apiprogress", &mut buf);
        ui.output(&String::from_utf8_lossy(&buf));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    fn completions_for(shell: Shell) -> String {
        let mut ui = MockUI::new();
        CompletionsCommand::new(CompletionsArgs { shell })
            .execute(&mut ui)
            .unwrap();
        ui.outputs().concat()
    }

    #[test]
    fn generates_bash_completions() {
        let output = completions_for(Shell::Bash);
        assert!(output.contains("apiprogress"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(completions_for(Shell::Zsh).contains("apiprogress"));
    }

    #[test]
    fn generates_fish_completions() {
        assert!(completions_for(Shell::Fish).contains("apiprogress"));
    }
}
