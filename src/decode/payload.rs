//! Category metadata payloads (`.category.yml`).
//!
//! ```yaml
//! index: 2
//! title: Fruits
//! sub:
//!   - id: citrus
//!     index: 1
//! components:
//!   - file: basket.checks
//!     content:
//!       list: [{check: apple}]
//! ```

use crate::decoder::{DecoderRegistry, Dispatch};
use crate::error::ComponentError;
use crate::meta::collect_meta;
use crate::tree::Category;
use crate::types::CATEGORY_MARKER;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::io::Read;
use tracing::warn;

#[derive(Deserialize)]
struct CategoryDoc {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    index: f64,
    #[serde(default)]
    sub: Vec<CategoryDoc>,
    #[serde(default)]
    components: Vec<InlineComponent>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct InlineComponent {
    file: String,
    content: Value,
}

/// Parse a marker payload into a detached category named `id`.
///
/// Inline components are dispatched through `registry` as if they were
/// files of the described directory.
pub fn parse_category(
    id: &str,
    reader: &mut dyn Read,
    registry: &DecoderRegistry,
) -> Result<Category, ComponentError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.trim().is_empty() {
        return Ok(Category::new(id));
    }
    let doc: Option<CategoryDoc> = serde_yaml::from_str(&text)?;
    let Some(doc) = doc else {
        return Ok(Category::new(id));
    };
    if let Some(declared) = doc.id.as_deref() {
        if declared != id {
            warn!(
                category = id,
                declared, "Ignoring id in category metadata, the directory name is used"
            );
        }
    }
    build(id.to_string(), doc, registry)
}

fn build(id: String, doc: CategoryDoc, registry: &DecoderRegistry) -> Result<Category, ComponentError> {
    let mut category = Category::new(id);
    category.index = doc.index;
    category.meta = collect_meta(doc.extra)?;

    for sub in doc.sub {
        let sub_id = match sub.id.as_deref() {
            Some(sub_id) if !sub_id.is_empty() && !sub_id.contains('/') => sub_id.to_string(),
            Some(sub_id) => {
                return Err(ComponentError::Invalid(format!(
                    "invalid subcategory id {:?} in {:?}",
                    sub_id, category.id
                )))
            }
            None => {
                return Err(ComponentError::Invalid(format!(
                    "subcategory of {:?} has no id",
                    category.id
                )))
            }
        };
        let child = build(sub_id, sub, registry)?;
        category.merge_child(child);
    }

    for inline in doc.components {
        let component = decode_inline(inline, registry)?;
        category.components.push(component);
    }
    Ok(category)
}

fn decode_inline(
    inline: InlineComponent,
    registry: &DecoderRegistry,
) -> Result<Box<dyn crate::component::Component>, ComponentError> {
    let file = inline.file;
    if file.contains('/') || file == CATEGORY_MARKER {
        return Err(ComponentError::Invalid(format!(
            "invalid inline component file {:?}",
            file
        )));
    }
    let (decoder, id) = match registry.dispatch(&file) {
        Dispatch::Matched { decoder, id, .. } => (decoder, id),
        Dispatch::NoMatch => {
            return Err(ComponentError::Invalid(format!(
                "no decoder matches inline component {:?}",
                file
            )))
        }
    };
    let bytes = match inline.content {
        Value::String(s) => s.into_bytes(),
        other => serde_yaml::to_string(&other)?.into_bytes(),
    };
    decoder
        .decode(&id, &mut bytes.as_slice())
        .map_err(|e| ComponentError::Invalid(format!("inline component {}: {}", file, e)))
}
