//! MergeService: orchestrates sources, applies merge policy, deserializes to TentConfig.

use crate::config::sources::{directory_file, environment, global_file};
use crate::config::TentConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config for a content directory and standard sources.
    /// Precedence: defaults (lowest) -> global file -> directory file -> environment (highest).
    pub fn load(content_root: &Path) -> Result<TentConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = directory_file::add_to_builder(builder, content_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<TentConfig, ConfigError> {
        use config::File;

        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
