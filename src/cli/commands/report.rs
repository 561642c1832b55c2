//! The `apiprogress report` command.
//!
//! Runs the whole pipeline: load the implemented list, obtain the catalog,
//! render the Markdown report and write it. Any failure aborts before the
//! report file is touched.

use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

use crate::cli::args::ReportArgs;
use crate::config::ProgressConfig;
use crate::error::{ProgressError, Result};
use crate::implemented::load_implemented;
use crate::report::{build_report, classify, percentage, write_report};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::source::CatalogSource;

/// The report command implementation.
pub struct ReportCommand {
    config: ProgressConfig,
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(config: ProgressConfig, args: ReportArgs) -> Self {
        Self { config, args }
    }

    fn implemented_path(&self) -> Result<PathBuf> {
        self.args
            .implemented
            .clone()
            .or_else(|| self.config.implemented.clone())
            .ok_or(ProgressError::ImplementedListMissing)
    }

    fn output_path(&self) -> PathBuf {
        self.args
            .output
            .clone()
            .unwrap_or_else(|| self.config.output.clone())
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let implemented = load_implemented(&self.implemented_path()?)?;
        info!("{} implemented methods", implemented.len());

        let source = CatalogSource::resolve(&self.config, &self.args.source);
        let catalog = source.load(ui)?;

        let markdown = build_report(&catalog, &implemented, &self.config.template(), Utc::now())?;
        let percent = percentage(&catalog, &implemented)?;

        let categories = classify(&catalog, &implemented);
        if ui.output_mode().shows_detail() {
            for category in &categories {
                ui.message(&format!(
                    "{}: {} implemented, {} missing, {} undocumented",
                    category.name,
                    category.matched.len(),
                    category.missing.len(),
                    category.extra.len()
                ));
            }
        }

        let undocumented: usize = categories.iter().map(|c| c.extra.len()).sum();
        if undocumented > 0 {
            ui.warning(&format!(
                "{} implemented method(s) not listed in the documentation",
                undocumented
            ));
        }

        if self.args.dry_run {
            ui.output(&markdown);
            return Ok(CommandResult::success());
        }

        let output = self.output_path();
        write_report(&output, &markdown)?;
        info!("Wrote report to {}", output.display());
        ui.success(&format!(
            "Wrote {} ({}% of {} methods)",
            output.display(),
            percent.floor() as i64,
            catalog.method_count()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SourceArgs;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"<html><body>
<h2>API Methods</h2>
<div class="wspanel">
  <div class="package"><h3>Track</h3><ul><li>track.love</li><li>track.ban</li></ul></div>
  <div class="package"><h3>Album</h3><ul><li>album.getInfo</li><li>album.search</li></ul></div>
</div>
</body></html>"#;

    struct Fixture {
        temp: TempDir,
    }

    impl Fixture {
        fn new(implemented: &str) -> Self {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("intro.html"), PAGE).unwrap();
            fs::write(temp.path().join("implemented.txt"), implemented).unwrap();
            Self { temp }
        }

        fn args(&self) -> ReportArgs {
            ReportArgs {
                source: SourceArgs {
                    html: Some(self.temp.path().join("intro.html")),
                    ..Default::default()
                },
                implemented: Some(self.temp.path().join("implemented.txt")),
                output: Some(self.output()),
                dry_run: false,
            }
        }

        fn output(&self) -> PathBuf {
            self.temp.path().join("PROGRESS.md")
        }
    }

    #[test]
    fn writes_report_file() {
        let fixture = Fixture::new("album.getInfo\ntrack.love\ntrack.scrobble\n");
        let cmd = ReportCommand::new(ProgressConfig::default(), fixture.args());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        let report = fs::read_to_string(fixture.output()).unwrap();
        assert!(report.starts_with("# Api Progress ![Progress](http://progressed.io/bar/75)"));
        assert!(report.find("## Album").unwrap() < report.find("## Track").unwrap());
        assert!(report.contains("- _track.scrobble_ *\n"));
        assert!(ui.has_success("75% of 4 methods"));
        assert!(ui.has_warning("1 implemented method(s) not listed"));
    }

    #[test]
    fn dry_run_prints_instead_of_writing() {
        let fixture = Fixture::new("album.getInfo\n");
        let args = ReportArgs {
            dry_run: true,
            ..fixture.args()
        };
        let cmd = ReportCommand::new(ProgressConfig::default(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(!fixture.output().exists());
        assert_eq!(ui.outputs().len(), 1);
        assert!(ui.outputs()[0].contains("- [album.getInfo](http://www.last.fm/api/show/album.getInfo)"));
    }

    #[test]
    fn verbose_mode_lists_categories() {
        let fixture = Fixture::new("album.getInfo\n");
        let cmd = ReportCommand::new(ProgressConfig::default(), fixture.args());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Album: 1 implemented, 1 missing, 0 undocumented"));
        assert!(ui.has_message("Track: 0 implemented, 2 missing, 0 undocumented"));
        assert!(!ui.has_warning("not listed"));
    }

    #[test]
    fn implemented_path_from_config() {
        let fixture = Fixture::new("track.ban\n");
        let config = ProgressConfig {
            implemented: Some(fixture.temp.path().join("implemented.txt")),
            ..Default::default()
        };
        let args = ReportArgs {
            implemented: None,
            ..fixture.args()
        };

        ReportCommand::new(config, args)
            .execute(&mut MockUI::new())
            .unwrap();

        assert!(fixture.output().exists());
    }

    #[test]
    fn missing_implemented_list_is_error() {
        let fixture = Fixture::new("");
        let args = ReportArgs {
            implemented: None,
            ..fixture.args()
        };

        let err = ReportCommand::new(ProgressConfig::default(), args)
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, ProgressError::ImplementedListMissing));
        assert!(!fixture.output().exists());
    }

    #[test]
    fn parse_failure_writes_nothing() {
        let fixture = Fixture::new("album.getInfo\n");
        fs::write(fixture.temp.path().join("intro.html"), "<p>moved</p>").unwrap();

        let err = ReportCommand::new(ProgressConfig::default(), fixture.args())
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, ProgressError::Parse { .. }));
        assert!(!fixture.output().exists());
    }

    #[test]
    fn empty_catalog_writes_nothing() {
        let fixture = Fixture::new("album.getInfo\n");
        fs::write(
            fixture.temp.path().join("intro.html"),
            r#"<h2>API Methods</h2><div class="wspanel"></div>"#,
        )
        .unwrap();

        let err = ReportCommand::new(ProgressConfig::default(), fixture.args())
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, ProgressError::EmptyCatalog));
        assert!(!fixture.output().exists());
    }
}
