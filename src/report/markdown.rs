//! Markdown rendering of the progress report.

use chrono::{DateTime, Utc};

use crate::catalog::MethodCatalog;
use crate::error::Result;

use super::classify::{classify, percentage};

/// Base URL of per-method documentation pages.
pub const DEFAULT_DOC_URL: &str = "http://www.last.fm/api/show/";

/// Base URL of the progress bar image; the floored percentage is appended.
pub const DEFAULT_PROGRESS_BAR_URL: &str = "http://progressed.io/bar/";

/// Invariant long date with short time, e.g. `Friday, 16 October 2026 14:05`.
pub const TIMESTAMP_FORMAT: &str = "%A, %d %B %Y %H:%M";

const INTRO_TEMPLATE: &str = concat!(
    "# Api Progress ![Progress]({progress_bar})\n",
    "\n",
    "These are all the Last.fm API methods currently available. \n",
    "\n",
    "- Methods implemented by the [Inflatable Last.fm .NET SDK](https://github.com/inflatablefriends/lastfm) link to the relevant documentation page.\n",
    "- Methods ~~marked with strikethrough~~ aren't currently implemented. Pull requests are welcome!\n",
    "- Methods _marked with an asterisk *_ aren't listed on [the Last.fm documentation](http://www.last.fm/api), so they might not work!\n",
    "\n",
    "This list is generated by the [ProgressReport](src/IF.Lastfm.ProgressReport) tool in the solution. Last updated on {updated}\n",
);

/// URL templates used when rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    /// Prefix for method documentation links.
    pub doc_url: String,
    /// Prefix for the progress bar image.
    pub progress_bar_url: String,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            doc_url: DEFAULT_DOC_URL.to_string(),
            progress_bar_url: DEFAULT_PROGRESS_BAR_URL.to_string(),
        }
    }
}

impl ReportTemplate {
    fn intro(&self, percent: f64, now: DateTime<Utc>) -> String {
        let progress_bar = format!("{}{}", self.progress_bar_url, percent.floor() as i64);
        INTRO_TEMPLATE
            .replace("{progress_bar}", &progress_bar)
            .replace("{updated}", &now.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Render the Markdown progress report.
///
/// Categories appear in lexicographic order. Category names are written
/// verbatim; no Markdown escaping is applied.
pub fn build_report(
    catalog: &MethodCatalog,
    implemented: &[String],
    template: &ReportTemplate,
    now: DateTime<Utc>,
) -> Result<String> {
    let percent = percentage(catalog, implemented)?;
    let mut out = template.intro(percent, now);

    for category in classify(catalog, implemented) {
        out.push_str(&format!("## {}\n\n", category.name));
        for method in &category.matched {
            out.push_str(&format!("- [{0}]({1}{0})\n", method, template.doc_url));
        }
        for method in &category.missing {
            out.push_str(&format!("- ~~[{0}]({1}{0})~~\n", method, template.doc_url));
        }
        for method in &category.extra {
            out.push_str(&format!("- _{}_ *\n", method));
        }
        out.push('\n');
    }

    Ok(out)
}
