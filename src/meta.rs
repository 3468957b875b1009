//! Open metadata maps collected from YAML payloads.

use crate::error::ComponentError;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Free-form string metadata attached to categories and documents.
pub type Meta = BTreeMap<String, String>;

/// Collapse the unmodelled keys of a payload into string metadata.
///
/// Scalars keep their textual form and null becomes the empty string.
/// Sequences and mappings are rejected.
pub(crate) fn collect_meta(extra: BTreeMap<String, Value>) -> Result<Meta, ComponentError> {
    let mut meta = Meta::new();
    for (key, value) in extra {
        let text = match value {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                return Err(ComponentError::Invalid(format!(
                    "metadata field {:?} must be a scalar",
                    key
                )));
            }
        };
        meta.insert(key, text);
    }
    Ok(meta)
}

/// YAML scalar for a metadata value, the inverse of [`collect_meta`].
///
/// Text that `collect_meta` would have produced from a number or a bool is
/// written back as that scalar; anything else stays a string.
pub(crate) fn meta_value(text: &str) -> Value {
    if let Ok(b) = text.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(n) = text.parse::<i64>() {
        if n.to_string() == text {
            return Value::Number(n.into());
        }
    }
    if let Ok(f) = text.parse::<f64>() {
        let number = serde_yaml::Number::from(f);
        if f.is_finite() && number.to_string() == text {
            return Value::Number(number);
        }
    }
    Value::String(text.to_string())
}
