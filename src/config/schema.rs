//! Configuration schema for apiprogress.
//!
//! Maps the optional `apiprogress.yml` file. Every field has a default, so
//! an empty file (or no file) is a valid configuration.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::report::{ReportTemplate, DEFAULT_DOC_URL, DEFAULT_PROGRESS_BAR_URL};

/// Documentation page scraped for the method catalog.
pub const DEFAULT_SOURCE_URL: &str = "http://www.last.fm/api/intro";

/// Report file written when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "PROGRESS.md";

/// Root configuration structure for apiprogress.yml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Documentation page to scrape
    pub source_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with the request
    pub user_agent: Option<String>,

    /// Report output path
    pub output: PathBuf,

    /// File listing implemented method names, one per line
    pub implemented: Option<PathBuf>,

    /// Prefix for method documentation links
    pub doc_url: String,

    /// Prefix for the progress bar image
    pub progress_bar_url: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            implemented: None,
            doc_url: DEFAULT_DOC_URL.to_string(),
            progress_bar_url: DEFAULT_PROGRESS_BAR_URL.to_string(),
        }
    }
}

impl ProgressConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL templates for report rendering.
    pub fn template(&self) -> ReportTemplate {
        ReportTemplate {
            doc_url: self.doc_url.clone(),
            progress_bar_url: self.progress_bar_url.clone(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
