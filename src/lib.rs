//! apiprogress - API documentation coverage reports.
//!
//! Scrapes the list of documented API methods from a documentation page,
//! compares it with the methods an SDK implements and renders a Markdown
//! progress report.
//!
//! # Modules
//!
//! - [`catalog`] - The scraped category to method mapping
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP fetching and markup extraction
//! - [`implemented`] - Loading the implemented method list
//! - [`report`] - Classification, Markdown rendering and file output
//! - [`ui`] - Terminal output and spinners
//!
//! # Example
//!
//! ```
//! use apiprogress::fetch::extract_catalog;
//! use apiprogress::report::percentage;
//!
//! let html = r#"<h2>API Methods</h2>
//! <div class="wspanel"><div class="package">
//!   <h3>Album</h3><ul><li>album.getInfo</li><li>album.search</li></ul>
//! </div></div>"#;
//!
//! let catalog = extract_catalog(html).unwrap();
//! let pct = percentage(&catalog, &["album.getInfo".to_string()]).unwrap();
//! assert_eq!(pct, 50.0);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod implemented;
pub mod report;
pub mod ui;

pub use catalog::{Category, MethodCatalog};
pub use error::{ProgressError, Result};
