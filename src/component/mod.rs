//! Components
//!
//! Leaf values attached to categories. The set of variants is open: the
//! built-in picture and checklist types sit next to any type a caller
//! registers a decoder for.

pub mod checklist;
pub mod picture;

use crate::error::ComponentError;
use std::any::Any;
use std::fmt::Debug;

pub use checklist::{Check, Checklist, ChecklistDecoder};
pub use picture::{Picture, PictureDecoder};

/// A typed leaf of the category tree.
pub trait Component: Debug + Send + Sync {
    /// Local identifier derived from the item's filename.
    fn id(&self) -> &str;

    /// Sort key among the sibling components.
    fn order(&self) -> f64;

    /// Content in the form it was decoded from.
    fn encode(&self) -> Result<Vec<u8>, ComponentError>;

    /// Short label of the variant, used in logs and listings.
    fn kind(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Component {
    /// Downcast to a concrete variant.
    pub fn downcast_ref<T: Component + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
