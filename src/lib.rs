//! Tent: Ordered Category Trees from Path-Addressed Content
//!
//! Walks a source of named items (a directory, or an in-memory list) and
//! builds a tree of categories. `.category.yml` markers carry category
//! metadata; every other item is handed to the decoder whose prefix and
//! extension claim its file name. The finished tree is sorted by index and
//! component order.

pub mod component;
pub mod config;
pub mod decode;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod meta;
pub mod source;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use component::Component;
pub use decode::{decode, decode_with, decode_with_summary, DecodeSummary, TreeDecoder};
pub use decoder::{Decoder, DecoderRegistry, Format};
pub use error::{ComponentError, DecodeError, RegistryError, SourceError};
pub use meta::Meta;
pub use source::{FileSource, Item, MemSource, Source};
pub use tree::Category;
