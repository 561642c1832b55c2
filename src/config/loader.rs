//! Configuration file discovery and loading.

use crate::config::schema::ProgressConfig;
use crate::error::{ProgressError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed in the working directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["apiprogress.yml", ".apiprogress.yml"];

/// Find a config file in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `dir` is searched and the
/// defaults are used when nothing is found.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ProgressConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(dir) {
            Some(path) => path,
            None => {
                debug!("No config file in {}; using defaults", dir.display());
                return Ok(ProgressConfig::default());
            }
        },
    };

    debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<ProgressConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProgressError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProgressError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ProgressConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProgressConfig> {
    if content.trim().is_empty() {
        return Ok(ProgressConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ProgressError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, ProgressConfig::default());
    }

    #[test]
    fn discovers_config_in_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("apiprogress.yml"), "timeout_secs: 7\n").unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn visible_file_wins_over_hidden() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("apiprogress.yml"), "timeout_secs: 7\n").unwrap();
        fs::write(temp.path().join(".apiprogress.yml"), "timeout_secs: 9\n").unwrap();

        let found = discover_config(temp.path()).unwrap();
        assert!(found.ends_with("apiprogress.yml"));
        assert_eq!(load_config(None, temp.path()).unwrap().timeout_secs, 7);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, ProgressError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");
        fs::write(&path, "output: docs/PROGRESS.md\n").unwrap();

        let config = load_config(Some(&path), temp.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("docs/PROGRESS.md"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("  \n", Path::new("apiprogress.yml")).unwrap();
        assert_eq!(config, ProgressConfig::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("timeout_secs: [not, a, number]", Path::new("apiprogress.yml"))
            .unwrap_err();
        match err {
            ProgressError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("apiprogress.yml"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
