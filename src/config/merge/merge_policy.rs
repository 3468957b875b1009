//! Lowest-precedence layer built from `TentConfig::default()`.

use crate::config::TentConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder whose first source is the default configuration.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&TentConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
