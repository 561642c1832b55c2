//! Loading the list of implemented method names.
//!
//! The list is produced outside this tool. It is read from a plain text
//! file with one method name per line; blank lines and lines starting with
//! `#` are ignored.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ProgressError, Result};

/// Parse implemented method names from text.
pub fn parse_implemented(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Load implemented method names from a file.
pub fn load_implemented(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ProgressError::ImplementedListNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let methods = parse_implemented(&content);
    debug!(
        "Loaded {} implemented methods from {}",
        methods.len(),
        path.display()
    );
    Ok(methods)
}
