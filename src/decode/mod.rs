//! Decode Orchestrator
//!
//! Pulls items from a [`Source`], routes category metadata markers into the
//! tree and every other item through the decoder registry, then normalizes
//! the finished tree once. The first failure aborts the whole decode.

pub mod payload;

use crate::decoder::{Decoder, DecoderRegistry, Dispatch};
use crate::error::DecodeError;
use crate::source::{Item, Source};
use crate::tree::Category;
use crate::types::{split_last_segment, split_name, CATEGORY_MARKER, ROOT_ID};
use serde::Serialize;
use tracing::{debug, info};

pub use payload::parse_category;

/// Counters collected while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    /// Items pulled from the source
    pub items: usize,
    /// Category metadata markers merged
    pub categories: usize,
    /// Components decoded from items
    pub components: usize,
    /// Items no decoder claimed
    pub skipped: usize,
}

/// Incremental decoder owning the tree under construction.
pub struct TreeDecoder<'r> {
    registry: &'r DecoderRegistry,
    root: Category,
    summary: DecodeSummary,
}

impl<'r> TreeDecoder<'r> {
    pub fn new(registry: &'r DecoderRegistry) -> Self {
        Self {
            registry,
            root: Category::root(),
            summary: DecodeSummary::default(),
        }
    }

    /// Add one item to the tree.
    pub fn feed(&mut self, item: &dyn Item) -> Result<(), DecodeError> {
        self.summary.items += 1;
        let name = item.name();
        let (dir, file) = split_name(name);
        if file == CATEGORY_MARKER {
            self.merge_category(item, dir)
        } else {
            self.decode_component(item, dir, file)
        }
    }

    pub fn summary(&self) -> &DecodeSummary {
        &self.summary
    }

    /// Normalize and return the tree.
    pub fn finish(mut self) -> (Category, DecodeSummary) {
        self.root.normalize();
        info!(
            items = self.summary.items,
            categories = self.summary.categories,
            components = self.summary.components,
            skipped = self.summary.skipped,
            "Decoded category tree"
        );
        (self.root, self.summary)
    }

    fn merge_category(&mut self, item: &dyn Item, dir: &str) -> Result<(), DecodeError> {
        let name = item.name();
        let mut reader = item.content().map_err(|source| DecodeError::Content {
            item: name.to_string(),
            source,
        })?;
        let target = split_last_segment(dir);
        let id = target.map(|(_, id)| id).unwrap_or(ROOT_ID);
        let category = payload::parse_category(id, &mut *reader, self.registry).map_err(|source| {
            DecodeError::Category {
                item: name.to_string(),
                source,
            }
        })?;

        match target {
            Some((parent, _)) => {
                self.root.ensure(parent).merge_child(category);
            }
            None => self.root.merge(category),
        }
        self.summary.categories += 1;
        debug!(item = name, category = id, "Merged category metadata");
        Ok(())
    }

    fn decode_component(&mut self, item: &dyn Item, dir: &str, file: &str) -> Result<(), DecodeError> {
        let name = item.name();
        let registry = self.registry;
        let (decoder, id) = match registry.dispatch(file) {
            Dispatch::Matched { decoder, id, .. } => (decoder, id),
            Dispatch::NoMatch => {
                self.summary.skipped += 1;
                debug!(item = name, "No decoder matched, skipping");
                return Ok(());
            }
        };

        let mut reader = item.content().map_err(|source| DecodeError::Content {
            item: name.to_string(),
            source,
        })?;
        let component = decoder
            .decode(&id, &mut *reader)
            .map_err(|source| DecodeError::Component {
                item: name.to_string(),
                source,
            })?;
        drop(reader);

        debug!(item = name, kind = component.kind(), id = %id, "Decoded component");
        self.root.ensure(dir).components.push(component);
        self.summary.components += 1;
        Ok(())
    }
}

/// Decode `source` with the built-in decoders plus `extra`.
pub fn decode<S: Source>(source: S, extra: Vec<Box<dyn Decoder>>) -> Result<Category, DecodeError> {
    let registry = DecoderRegistry::new(extra)?;
    decode_with(source, &registry)
}

/// Decode `source` with a registry built by the caller.
pub fn decode_with<S: Source>(source: S, registry: &DecoderRegistry) -> Result<Category, DecodeError> {
    decode_with_summary(source, registry).map(|(root, _)| root)
}

/// Like [`decode_with`], also returning the decode counters.
pub fn decode_with_summary<S: Source>(
    mut source: S,
    registry: &DecoderRegistry,
) -> Result<(Category, DecodeSummary), DecodeError> {
    let mut decoder = TreeDecoder::new(registry);
    while let Some(item) = source.next().map_err(DecodeError::Enumerate)? {
        decoder.feed(item.as_ref())?;
    }
    Ok(decoder.finish())
}
