//! Progress report generation.
//!
//! This module compares a [`MethodCatalog`](crate::catalog::MethodCatalog)
//! with the implemented method names and renders the result:
//! - Per-category classification and the completion percentage in [`classify`]
//! - Markdown rendering in [`markdown`]
//! - File output in [`writer`]

pub mod classify;
pub mod markdown;
pub mod writer;

pub use classify::{classify, percentage, CategoryReport};
pub use markdown::{
    build_report, ReportTemplate, DEFAULT_DOC_URL, DEFAULT_PROGRESS_BAR_URL, TIMESTAMP_FORMAT,
};
pub use writer::write_report;
