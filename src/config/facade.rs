//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TentConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a content directory from files and environment.
    pub fn load(content_root: &Path) -> Result<TentConfig, ConfigError> {
        MergeService::load(content_root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<TentConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> TentConfig {
        TentConfig::default()
    }
}
