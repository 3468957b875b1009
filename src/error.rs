//! Error types for tree decoding, decoder registration, and tooling.

use thiserror::Error;

/// Errors raised by component decoders and encoders
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid content: {0}")]
    Invalid(String),
}

/// Errors raised by an item source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to walk {path}: {message}")]
    Walk { path: String, message: String },

    #[error("Source root is not a directory: {0}")]
    NotADirectory(String),

    #[error("Invalid item path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decoder registration errors, raised before any item is processed
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Decoder {decoder} ({kind}) declares no extensions")]
    NoExtensions { decoder: usize, kind: String },

    #[error("Decoder {decoder} ({kind}) has invalid extension {extension:?}: {reason}")]
    InvalidExtension {
        decoder: usize,
        kind: String,
        extension: String,
        reason: &'static str,
    },

    #[error("Decoder {decoder} ({kind}) has invalid prefix {prefix:?}: {reason}")]
    InvalidPrefix {
        decoder: usize,
        kind: String,
        prefix: String,
        reason: &'static str,
    },

    #[error(
        "Decoders {first} ({first_kind}) and {second} ({second_kind}) both match \
         prefix {prefix:?} with extension {extension:?}"
    )]
    Collision {
        first: usize,
        first_kind: String,
        second: usize,
        second_kind: String,
        prefix: String,
        extension: String,
    },
}

/// Errors raised while decoding a source into a category tree
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid decoder configuration: {0}")]
    Registry(#[from] RegistryError),

    #[error("Failed to enumerate items: {0}")]
    Enumerate(#[source] SourceError),

    #[error("{item}: failed to open content: {source}")]
    Content {
        item: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{item}: invalid category metadata: {source}")]
    Category {
        item: String,
        #[source]
        source: ComponentError,
    },

    #[error("{item}: {source}")]
    Component {
        item: String,
        #[source]
        source: ComponentError,
    },
}

impl DecodeError {
    /// Name of the item the error is attributed to, if any
    pub fn item(&self) -> Option<&str> {
        match self {
            DecodeError::Registry(_) | DecodeError::Enumerate(_) => None,
            DecodeError::Content { item, .. }
            | DecodeError::Category { item, .. }
            | DecodeError::Component { item, .. } => Some(item),
        }
    }
}

/// Errors surfaced by configuration, logging and the command-line tooling
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
