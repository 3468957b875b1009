//! Category nodes and path resolution.

use crate::component::Component;
use crate::meta::Meta;
use crate::types::{segments, ROOT_ID};

/// A node of the tree: ordered subcategories plus leaf components.
#[derive(Debug, Default)]
pub struct Category {
    pub id: String,
    /// Sort key among siblings
    pub index: f64,
    pub meta: Meta,
    pub sub: Vec<Category>,
    pub components: Vec<Box<dyn Component>>,
}

impl Category {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// An empty tree root.
    pub fn root() -> Self {
        Self::new(ROOT_ID)
    }

    /// Return the node at `path`, creating every missing node on the way.
    ///
    /// Empty segments are ignored, so the empty path is `self`. Existing
    /// nodes are never modified or reordered; new nodes are appended.
    pub fn ensure(&mut self, path: &str) -> &mut Category {
        let mut node = self;
        for segment in segments(path) {
            let pos = match node.sub.iter().position(|c| c.id == segment) {
                Some(pos) => pos,
                None => {
                    node.sub.push(Category::new(segment));
                    node.sub.len() - 1
                }
            };
            node = &mut node.sub[pos];
        }
        node
    }

    /// Node at `path`, if it exists.
    pub fn find(&self, path: &str) -> Option<&Category> {
        let mut node = self;
        for segment in segments(path) {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Direct child with the given id.
    pub fn child(&self, id: &str) -> Option<&Category> {
        self.sub.iter().find(|c| c.id == id)
    }

    /// Merge `other` into this node.
    ///
    /// The index is replaced, metadata keys are overwritten one by one,
    /// subcategories are merged by id and components are appended.
    pub fn merge(&mut self, other: Category) {
        self.index = other.index;
        self.meta.extend(other.meta);
        for sub in other.sub {
            self.merge_child(sub);
        }
        self.components.extend(other.components);
    }

    /// Merge `child` into the subcategory with the same id, appending it if
    /// there is none. Returns the merged node.
    pub fn merge_child(&mut self, child: Category) -> &mut Category {
        match self.sub.iter().position(|c| c.id == child.id) {
            Some(pos) => {
                let existing = &mut self.sub[pos];
                existing.merge(child);
                existing
            }
            None => {
                self.sub.push(child);
                let last = self.sub.len() - 1;
                &mut self.sub[last]
            }
        }
    }

    /// Number of categories below this node.
    pub fn count_categories(&self) -> usize {
        self.sub.iter().map(|c| 1 + c.count_categories()).sum()
    }

    /// Number of components in this node's subtree.
    pub fn count_components(&self) -> usize {
        self.components.len()
            + self
                .sub
                .iter()
                .map(Category::count_components)
                .sum::<usize>()
    }

    /// Visit every node depth-first with its slash-joined path ("" for self).
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&str, &'a Category),
    {
        fn recurse<'a, F: FnMut(&str, &'a Category)>(node: &'a Category, path: &str, visit: &mut F) {
            visit(path, node);
            for child in &node.sub {
                let child_path = if path.is_empty() {
                    child.id.clone()
                } else {
                    format!("{}/{}", path, child.id)
                };
                recurse(child, &child_path, visit);
            }
        }
        recurse(self, "", &mut visit);
    }
}
