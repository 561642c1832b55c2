//! The `apiprogress catalog` command.
//!
//! Prints the scraped catalog, either as an indented listing or as JSON.

use anyhow::Context;
use std::fmt::Write;

use crate::catalog::MethodCatalog;
use crate::cli::args::CatalogArgs;
use crate::config::ProgressConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::source::CatalogSource;

/// The catalog command implementation.
pub struct CatalogCommand {
    config: ProgressConfig,
    args: CatalogArgs,
}

impl CatalogCommand {
    /// Create a new catalog command.
    pub fn new(config: ProgressConfig, args: CatalogArgs) -> Self {
        Self { config, args }
    }
}

impl Command for CatalogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = CatalogSource::resolve(&self.config, &self.args.source);
        let catalog = source.load(ui)?;

        let text = if self.args.json {
            let mut json =
                serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
            json.push('\n');
            json
        } else {
            format_listing(&catalog)
        };
        ui.output(&text);

        Ok(CommandResult::success())
    }
}

/// Categories in document order, each followed by its indented methods.
fn format_listing(catalog: &MethodCatalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let _ = writeln!(out, "{} ({})", category.name, category.methods.len());
        for method in &category.methods {
            let _ = writeln!(out, "  {}", method);
        }
    }
    out
}
