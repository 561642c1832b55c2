//! Configuration loading for apiprogress.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Precedence
//!
//! Command-line flags (and their environment variables) override the config
//! file, which overrides the built-in defaults.
//!
//! # Example
//!
//! ```
//! use apiprogress::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("apiprogress.yml"), "timeout_secs: 10").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.timeout_secs, 10);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::{ProgressConfig, DEFAULT_OUTPUT, DEFAULT_SOURCE_URL};
