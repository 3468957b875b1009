//! Decoders
//!
//! A decoder claims filenames by a required prefix and a set of extensions,
//! and turns the content of a claimed item into a [`Component`].

pub mod registry;

use crate::component::Component;
use crate::error::ComponentError;
use std::io::Read;

pub use registry::{DecoderRegistry, Dispatch};

/// Filenames claimed by a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Required filename prefix; empty means no constraint
    pub prefix: String,
    /// Accepted extensions, each starting with `.`
    pub extensions: Vec<String>,
}

impl Format {
    pub fn new<I, S>(prefix: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Identifier for `filename` if this format claims it.
    ///
    /// The prefix is always stripped; the extension only when it is the sole
    /// accepted one.
    pub fn claim(&self, filename: &str) -> Option<String> {
        let rest = filename.strip_prefix(self.prefix.as_str())?;
        let ext = crate::types::extension(filename)?;
        if !self.extensions.iter().any(|e| e == ext) {
            return None;
        }
        if self.extensions.len() == 1 {
            Some(rest.strip_suffix(ext).unwrap_or(rest).to_string())
        } else {
            Some(rest.to_string())
        }
    }
}

/// Parses claimed items into components.
pub trait Decoder: Send + Sync {
    fn format(&self) -> Format;

    fn decode(&self, id: &str, reader: &mut dyn Read) -> Result<Box<dyn Component>, ComponentError>;

    /// Label used in diagnostics.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
