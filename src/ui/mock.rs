//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    outputs: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured command output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }
}

/// Spinner that does nothing.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.message("Fetching");
        ui.success("Done");
        ui.warning("Duplicate");
        ui.error("Boom");
        ui.output("# Report\n");

        assert!(ui.has_message("Fetching"));
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Duplicate"));
        assert!(ui.has_error("Boom"));
        assert_eq!(ui.outputs(), &["# Report\n".to_string()]);
    }

    #[test]
    fn records_spinners() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let mut spinner = ui.start_spinner("Fetching catalog");
        spinner.finish_success("Fetched");

        assert_eq!(ui.spinners(), &["Fetching catalog".to_string()]);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
