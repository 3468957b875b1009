//! Per-directory config file: <content root>/tent.toml

use crate::config::DIRECTORY_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Add the content directory's config file to builder; absent files are ignored.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    content_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = content_root.join(DIRECTORY_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
