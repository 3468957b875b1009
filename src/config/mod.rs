//! Configuration
//!
//! Layered configuration for the `tent` tooling: built-in defaults, the
//! user's global file, a `tent.toml` next to the content, then `TENT_*`
//! environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

use crate::error::{ApiError, SourceError};
use crate::logging::LoggingConfig;
use crate::source::{filter_prefix, filter_suffix, FileSource, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use facade::ConfigLoader;

/// Name of the per-directory configuration file.
pub const DIRECTORY_CONFIG_FILE: &str = "tent.toml";

/// How content directories are enumerated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum walk depth below the content root
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Only items whose name ends with one of these suffixes are read
    #[serde(default)]
    pub include_suffix: Vec<String>,

    /// Items whose name starts with one of these prefixes are skipped
    #[serde(default)]
    pub exclude_prefix: Vec<String>,
}

impl SourceConfig {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            max_depth: self.max_depth,
        }
    }

    /// Open a filesystem source over `root` with these settings.
    pub fn open(&self, root: &Path) -> Result<FileSource, SourceError> {
        let mut source = FileSource::new(root)?.with_walker_config(self.walker_config());
        for suffix in &self.include_suffix {
            source = source.include(filter_suffix(suffix.as_str()));
        }
        for prefix in &self.exclude_prefix {
            source = source.exclude(filter_prefix(prefix.as_str()));
        }
        Ok(source)
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TentConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TentConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.source.include_suffix.iter().any(|s| s.is_empty()) {
            return Err(ApiError::ConfigError(
                "source.include_suffix cannot contain empty entries".to_string(),
            ));
        }
        if self.source.exclude_prefix.iter().any(|s| s.is_empty()) {
            return Err(ApiError::ConfigError(
                "source.exclude_prefix cannot contain empty entries".to_string(),
            ));
        }
        if self.source.max_depth == Some(0) {
            return Err(ApiError::ConfigError(
                "source.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
