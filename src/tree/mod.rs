//! Category tree: nodes, path resolution and ordering.

pub mod category;
pub mod normalize;

pub use category::Category;
pub use normalize::{compare_order, normalize};

impl Category {
    /// Sort the whole subtree into its canonical order.
    pub fn normalize(&mut self) {
        normalize::normalize(self);
    }
}
