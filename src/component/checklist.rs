//! Checklist component: a nested list of checks stored as YAML.
//!
//! ```yaml
//! index: 10
//! list:
//! - label: fruits
//!   children:
//!   - check: apple
//!   - check: pear
//! title: sample checklist
//! ```
//!
//! `index` orders the checklist among its siblings, `list` holds the checks
//! and every other scalar key ends up in `meta`.

use super::Component;
use crate::decoder::{Decoder, Format};
use crate::error::ComponentError;
use crate::meta::{collect_meta, meta_value, Meta};
use serde::{Deserialize, Serialize, Serializer};
use serde_yaml::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::io::Read;

/// Extension claimed by [`ChecklistDecoder`].
pub const CHECKLIST_EXTENSION: &str = ".checks";

/// A single entry: a group heading (`label`), an item (`check`), or both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Check {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Check>,
}

impl Check {
    pub fn item(check: impl Into<String>) -> Self {
        Self {
            check: Some(check.into()),
            ..Self::default()
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<Check>) -> Self {
        Self {
            label: Some(label.into()),
            children,
            ..Self::default()
        }
    }

    /// Number of items in this entry's subtree, the entry included.
    pub fn count_items(&self) -> usize {
        let own = usize::from(self.check.is_some());
        own + self.children.iter().map(Check::count_items).sum::<usize>()
    }
}

/// A checklist document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Checklist {
    pub id: String,
    pub index: f64,
    pub meta: Meta,
    pub list: Vec<Check>,
}

#[derive(Deserialize)]
struct ChecklistDoc {
    #[serde(default)]
    index: f64,
    #[serde(default)]
    list: Vec<Check>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Serialize)]
struct ChecklistDocRef<'a> {
    #[serde(serialize_with = "serialize_index")]
    index: f64,
    list: &'a [Check],
    #[serde(flatten)]
    meta: BTreeMap<&'a str, Value>,
}

/// Whole indices are written as integers (`index: 10`, not `10.0`).
fn serialize_index<S: Serializer>(index: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if index.fract() == 0.0 && index.abs() < EXACT {
        serializer.serialize_i64(*index as i64)
    } else {
        serializer.serialize_f64(*index)
    }
}

impl Checklist {
    /// Parse a checklist document.
    pub fn from_reader(id: &str, reader: &mut dyn Read) -> Result<Self, ComponentError> {
        let doc: ChecklistDoc = serde_yaml::from_reader(reader)?;
        Ok(Self {
            id: id.to_string(),
            index: doc.index,
            meta: collect_meta(doc.extra)?,
            list: doc.list,
        })
    }

    /// Number of check items across the whole list.
    pub fn count_items(&self) -> usize {
        self.list.iter().map(Check::count_items).sum()
    }
}

impl Component for Checklist {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> f64 {
        self.index
    }

    fn encode(&self) -> Result<Vec<u8>, ComponentError> {
        if let Some(key) = ["index", "list"].iter().find(|k| self.meta.contains_key(**k)) {
            return Err(ComponentError::Invalid(format!(
                "metadata key {:?} is reserved",
                key
            )));
        }
        let doc = ChecklistDocRef {
            index: self.index,
            list: &self.list,
            meta: self
                .meta
                .iter()
                .map(|(key, value)| (key.as_str(), meta_value(value)))
                .collect(),
        };
        Ok(serde_yaml::to_string(&doc)?.into_bytes())
    }

    fn kind(&self) -> &'static str {
        "checklist"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Decoder for `<name>.checks` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecklistDecoder;

impl Decoder for ChecklistDecoder {
    fn format(&self) -> Format {
        Format::new("", [CHECKLIST_EXTENSION])
    }

    fn decode(&self, id: &str, reader: &mut dyn Read) -> Result<Box<dyn Component>, ComponentError> {
        Ok(Box::new(Checklist::from_reader(id, reader)?))
    }

    fn kind(&self) -> &'static str {
        "checklist"
    }
}
