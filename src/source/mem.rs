//! In-memory source for fixtures and embedded trees.

use super::{Item, Source};
use crate::error::SourceError;
use std::io::{Cursor, Read};

/// A static item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemItem {
    pub name: String,
    /// `None` makes `content()` fail, modelling an unavailable item.
    pub contents: Option<Vec<u8>>,
}

impl MemItem {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: Some(contents.into()),
        }
    }

    /// An item whose content cannot be opened.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: None,
        }
    }
}

impl Item for MemItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> std::io::Result<Box<dyn Read + '_>> {
        match &self.contents {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("content of {} is unavailable", self.name),
            )),
        }
    }
}

/// A static source yielding its items in order.
#[derive(Debug, Clone, Default)]
pub struct MemSource {
    items: Vec<MemItem>,
    pos: usize,
}

impl MemSource {
    pub fn new(items: Vec<MemItem>) -> Self {
        Self { items, pos: 0 }
    }

    /// Build a source from `(name, contents)` pairs.
    pub fn from_pairs<N, C>(pairs: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<Vec<u8>>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, contents)| MemItem::new(name, contents))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Source for MemSource {
    fn next(&mut self) -> Result<Option<Box<dyn Item>>, SourceError> {
        let Some(item) = self.items.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        Ok(Some(Box::new(item.clone())))
    }
}
