//! Per-category comparison of documented and implemented methods.
//!
//! Matching is case-insensitive throughout: an implemented name belongs to a
//! category when it starts with the lower-cased category name, and it matches
//! a documented method when the two are equal ignoring case.

use std::collections::HashSet;

use crate::catalog::{Category, MethodCatalog};
use crate::error::{ProgressError, Result};

/// Classification of one category's methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category name as scraped.
    pub name: String,
    /// Documented and implemented, in catalog spelling and order.
    pub matched: Vec<String>,
    /// Documented but not implemented, in catalog order.
    pub missing: Vec<String>,
    /// Implemented under this category's prefix but not documented.
    pub extra: Vec<String>,
}

impl CategoryReport {
    /// Classify one category against the implemented list.
    pub fn new(category: &Category, implemented: &[String]) -> Self {
        let prefix = category.name.to_lowercase();

        let mut seen = HashSet::new();
        let candidates: Vec<&String> = implemented
            .iter()
            .filter(|m| m.to_lowercase().starts_with(&prefix))
            .filter(|m| seen.insert(m.to_lowercase()))
            .collect();
        let candidate_keys: HashSet<String> = candidates.iter().map(|m| m.to_lowercase()).collect();
        let documented: HashSet<String> =
            category.methods.iter().map(|m| m.to_lowercase()).collect();

        let (matched, missing): (Vec<String>, Vec<String>) = category
            .methods
            .iter()
            .cloned()
            .partition(|m| candidate_keys.contains(&m.to_lowercase()));

        let extra = candidates
            .into_iter()
            .filter(|m| !documented.contains(&m.to_lowercase()))
            .cloned()
            .collect();

        Self {
            name: category.name.clone(),
            matched,
            missing,
            extra,
        }
    }
}

/// Classify every category, sorted lexicographically by name.
pub fn classify(catalog: &MethodCatalog, implemented: &[String]) -> Vec<CategoryReport> {
    catalog
        .sorted()
        .into_iter()
        .map(|category| CategoryReport::new(category, implemented))
        .collect()
}

/// Percentage of the catalog that is implemented.
///
/// `100 * |implemented| / |all catalog methods|`, where implemented names are
/// counted once each ignoring case. An empty catalog is an error.
pub fn percentage(catalog: &MethodCatalog, implemented: &[String]) -> Result<f64> {
    let total = catalog.method_count();
    if total == 0 {
        return Err(ProgressError::EmptyCatalog);
    }

    let distinct: HashSet<String> = implemented.iter().map(|m| m.to_lowercase()).collect();
    Ok(100.0 * distinct.len() as f64 / total as f64)
}
