//! Deterministic ordering of a decoded tree.

use super::Category;
use std::cmp::Ordering;

/// Ascending order of sort keys with NaN after every number.
///
/// Equal keys (including `-0.0` and `0.0`) compare equal so a stable sort
/// keeps their discovery order.
pub fn compare_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Sort subcategories by index and components by order key, recursively.
pub fn normalize(node: &mut Category) {
    node.sub.sort_by(|a, b| compare_order(a.index, b.index));
    node.components
        .sort_by(|a, b| compare_order(a.order(), b.order()));
    for child in &mut node.sub {
        normalize(child);
    }
}
