//! Catalog acquisition shared by the `report` and `catalog` commands.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::catalog::MethodCatalog;
use crate::cli::args::SourceArgs;
use crate::config::ProgressConfig;
use crate::error::Result;
use crate::fetch::{extract_catalog, HttpFetcher, DEFAULT_USER_AGENT};
use crate::ui::UserInterface;

/// Where the catalog is read from, after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetch the page over HTTP.
    Remote {
        url: String,
        timeout: Duration,
        user_agent: String,
    },
    /// Parse a page saved on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Resolve the source; flags override config values.
    pub fn resolve(config: &ProgressConfig, args: &SourceArgs) -> Self {
        if let Some(path) = &args.html {
            return Self::File(path.clone());
        }

        Self::Remote {
            url: args.url.clone().unwrap_or_else(|| config.source_url.clone()),
            timeout: args
                .timeout
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.timeout()),
            user_agent: config
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Load the catalog from this source.
    pub fn load(&self, ui: &mut dyn UserInterface) -> Result<MethodCatalog> {
        match self {
            Self::File(path) => {
                info!("Reading documentation page from {}", path.display());
                let html = fs::read_to_string(path)?;
                extract_catalog(&html)
            }
            Self::Remote {
                url,
                timeout,
                user_agent,
            } => {
                info!("Fetching documentation page {}", url);
                let fetcher = HttpFetcher::with_options(*timeout, user_agent)?;
                let mut spinner = ui.start_spinner(&format!("Fetching {}", url));
                let fetched = fetcher.fetch_html(url).and_then(|html| {
                    spinner.set_message("Extracting method catalog");
                    extract_catalog(&html)
                });
                match fetched {
                    Ok(catalog) => {
                        spinner.finish_success(&format!(
                            "Found {} methods in {} categories",
                            catalog.method_count(),
                            catalog.len()
                        ));
                        Ok(catalog)
                    }
                    Err(e) => {
                        spinner.finish_error(&format!("Failed to load catalog from {}", url));
                        Err(e)
                    }
                }
            }
        }
    }
}
