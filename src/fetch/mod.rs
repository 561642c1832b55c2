//! Method catalog fetching.
//!
//! This module provides the HTTP fetcher for the documentation page and the
//! markup extraction that turns the page into a [`MethodCatalog`].
//!
//! [`MethodCatalog`]: crate::catalog::MethodCatalog

pub mod extract;
pub mod http;

pub use extract::extract_catalog;
pub use http::{HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
