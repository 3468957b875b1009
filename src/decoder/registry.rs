//! Decoder registry: built-in decoders followed by caller decoders.
//!
//! The registry is validated once when it is built. After that, any filename
//! is claimed by at most one decoder, so dispatch order only matters for
//! speed and never for the outcome.

use super::{Decoder, Format};
use crate::component::{ChecklistDecoder, PictureDecoder};
use crate::error::RegistryError;
use std::collections::HashSet;

struct Entry {
    decoder: Box<dyn Decoder>,
    format: Format,
}

/// Outcome of matching a filename against the registry.
pub enum Dispatch<'r> {
    Matched {
        decoder: &'r dyn Decoder,
        /// Position of the decoder in registration order
        index: usize,
        /// Identifier handed to the decoder
        id: String,
    },
    NoMatch,
}

impl Dispatch<'_> {
    pub fn is_match(&self) -> bool {
        matches!(self, Dispatch::Matched { .. })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Dispatch::Matched { id, .. } => Some(id),
            Dispatch::NoMatch => None,
        }
    }
}

impl std::fmt::Debug for Dispatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dispatch::Matched { decoder, index, id } => f
                .debug_struct("Matched")
                .field("kind", &decoder.kind())
                .field("index", index)
                .field("id", id)
                .finish(),
            Dispatch::NoMatch => f.write_str("NoMatch"),
        }
    }
}

/// Ordered, collision-free list of decoders.
pub struct DecoderRegistry {
    entries: Vec<Entry>,
}

impl DecoderRegistry {
    /// Built-in decoders followed by `extra`, in order.
    pub fn new(extra: Vec<Box<dyn Decoder>>) -> Result<Self, RegistryError> {
        let mut decoders = builtin_decoders();
        decoders.extend(extra);
        Self::with_decoders(decoders)
    }

    /// Registry holding exactly `decoders`, without the built-ins.
    pub fn with_decoders(decoders: Vec<Box<dyn Decoder>>) -> Result<Self, RegistryError> {
        let entries: Vec<Entry> = decoders
            .into_iter()
            .map(|decoder| {
                let format = decoder.format();
                Entry { decoder, format }
            })
            .collect();
        for (i, entry) in entries.iter().enumerate() {
            validate_format(i, entry)?;
        }
        detect_collisions(&entries)?;
        Ok(Self { entries })
    }

    /// Find the decoder claiming `filename`.
    pub fn dispatch(&self, filename: &str) -> Dispatch<'_> {
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(id) = entry.format.claim(filename) {
                return Dispatch::Matched {
                    decoder: entry.decoder.as_ref(),
                    index,
                    id,
                };
            }
        }
        Dispatch::NoMatch
    }

    /// Registered decoders with their formats, in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (&dyn Decoder, &Format)> {
        self.entries
            .iter()
            .map(|entry| (entry.decoder.as_ref(), &entry.format))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.decoder.kind(), &e.format)))
            .finish()
    }
}

fn builtin_decoders() -> Vec<Box<dyn Decoder>> {
    vec![Box::new(ChecklistDecoder), Box::new(PictureDecoder)]
}

fn validate_format(index: usize, entry: &Entry) -> Result<(), RegistryError> {
    let kind = entry.decoder.kind().to_string();
    let format = &entry.format;
    if format.prefix.contains('/') {
        return Err(RegistryError::InvalidPrefix {
            decoder: index,
            kind,
            prefix: format.prefix.clone(),
            reason: "prefix cannot contain '/'",
        });
    }
    if format.extensions.is_empty() {
        return Err(RegistryError::NoExtensions {
            decoder: index,
            kind,
        });
    }
    let mut seen = HashSet::new();
    for ext in &format.extensions {
        let reason = if !ext.starts_with('.') || ext.len() < 2 {
            Some("extension must be '.' followed by at least one character")
        } else if ext[1..].contains('.') {
            Some("extension cannot contain a second '.'")
        } else if ext.contains('/') {
            Some("extension cannot contain '/'")
        } else if !seen.insert(ext.as_str()) {
            Some("extension is listed twice")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(RegistryError::InvalidExtension {
                decoder: index,
                kind,
                extension: ext.clone(),
                reason,
            });
        }
    }
    Ok(())
}

/// Two formats overlap when they share an extension and one prefix is a
/// prefix of the other: some filename then starts with both prefixes.
fn detect_collisions(entries: &[Entry]) -> Result<(), RegistryError> {
    for (i, first) in entries.iter().enumerate() {
        for (j, second) in entries.iter().enumerate().skip(i + 1) {
            let (a, b) = (&first.format.prefix, &second.format.prefix);
            if !a.starts_with(b.as_str()) && !b.starts_with(a.as_str()) {
                continue;
            }
            let shared = first
                .format
                .extensions
                .iter()
                .find(|ext| second.format.extensions.contains(*ext));
            if let Some(extension) = shared {
                let prefix = if a.len() >= b.len() { a } else { b };
                return Err(RegistryError::Collision {
                    first: i,
                    first_kind: first.decoder.kind().to_string(),
                    second: j,
                    second_kind: second.decoder.kind().to_string(),
                    prefix: prefix.clone(),
                    extension: extension.clone(),
                });
            }
        }
    }
    Ok(())
}
