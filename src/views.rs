//! Tree Views
//!
//! Serializable snapshots of a decoded tree for listing and JSON output.

use crate::meta::Meta;
use crate::tree::Category;
use serde::{Deserialize, Serialize};

/// A component as shown to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentView {
    pub id: String,
    pub kind: String,
    /// Order key; `None` for non-finite keys
    pub order: Option<f64>,
    /// Encoded size in bytes; `None` when encoding fails
    pub size: Option<usize>,
}

/// A category and its subtree as shown to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: String,
    pub index: f64,
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub: Vec<CategoryView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentView>,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            index: category.index,
            meta: category.meta.clone(),
            sub: category.sub.iter().map(CategoryView::from).collect(),
            components: category
                .components
                .iter()
                .map(|c| {
                    let order = c.order();
                    ComponentView {
                        id: c.id().to_string(),
                        kind: c.kind().to_string(),
                        order: (order.is_finite() && order != f64::MAX).then_some(order),
                        size: c.encode().map(|bytes| bytes.len()).ok(),
                    }
                })
                .collect(),
        }
    }
}

/// One row of the per-category statistics table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// Slash-joined path, empty for the root
    pub path: String,
    pub index: f64,
    pub subcategories: usize,
    pub components: usize,
}

/// Statistics rows for every node, in traversal order.
pub fn category_rows(root: &Category) -> Vec<CategoryRow> {
    let mut rows = Vec::new();
    root.walk(|path, node| {
        rows.push(CategoryRow {
            path: path.to_string(),
            index: node.index,
            subcategories: node.sub.len(),
            components: node.components.len(),
        })
    });
    rows
}
