//! Item Sources
//!
//! A source yields a finite, ordered sequence of named items. Each item is
//! addressed by a slash-delimited path and exposes its content as a byte
//! stream that is opened on demand.

pub mod fs;
pub mod mem;

use crate::error::SourceError;
use std::io::Read;

pub use fs::{FileItem, FileSource, WalkerConfig};
pub use mem::{MemItem, MemSource};

/// A named, byte-addressable unit of content.
pub trait Item {
    /// Slash-delimited path identifying the item.
    fn name(&self) -> &str;

    /// Open the item's content. Called at most once per decode.
    fn content(&self) -> std::io::Result<Box<dyn Read + '_>>;
}

/// An origin of items, pulled one at a time.
pub trait Source {
    /// Next item, or `Ok(None)` once the sequence is exhausted.
    fn next(&mut self) -> Result<Option<Box<dyn Item>>, SourceError>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn next(&mut self) -> Result<Option<Box<dyn Item>>, SourceError> {
        (**self).next()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn next(&mut self) -> Result<Option<Box<dyn Item>>, SourceError> {
        (**self).next()
    }
}

/// Predicate over an item name, used to include or exclude items.
pub type PathFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Matches names ending with `suffix`.
pub fn filter_suffix(suffix: impl Into<String>) -> PathFilter {
    let suffix = suffix.into();
    Box::new(move |name| name.ends_with(suffix.as_str()))
}

/// Matches names starting with `prefix`.
pub fn filter_prefix(prefix: impl Into<String>) -> PathFilter {
    let prefix = prefix.into();
    Box::new(move |name| name.starts_with(prefix.as_str()))
}
