//! Depth inspection, flattening and emptiness over nested values

use serde_json::Value;

use super::Mapping;

fn children(value: &Value) -> Option<Box<dyn Iterator<Item = &Value> + '_>> {
    match value {
        Value::Object(map) => Some(Box::new(map.values())),
        Value::Array(items) => Some(Box::new(items.iter())),
        _ => None,
    }
}

fn level_depth<'a>(values: impl Iterator<Item = &'a Value>) -> usize {
    values
        .filter_map(|value| children(value).map(|nested| level_depth(nested) + 1))
        .fold(1, usize::max)
}

/// Maximum nesting depth; a flat mapping has depth 1.
///
/// Every object or array value adds a level, empty ones included, so
/// `{"a": []}` has depth 2.
pub fn depth(map: &Mapping) -> usize {
    level_depth(map.values())
}

fn collect_leaves<'a>(values: impl Iterator<Item = &'a Value>, out: &mut Vec<Value>) {
    for value in values {
        match children(value) {
            Some(nested) => collect_leaves(nested, out),
            None => out.push(value.clone()),
        }
    }
}

/// Every leaf value, depth first, in iteration order.
///
/// Empty nested containers contribute nothing.
pub fn flatten(map: &Mapping) -> Vec<Value> {
    let mut out = Vec::new();
    collect_leaves(map.values(), &mut out);
    out
}

/// Whether a single value counts as blank.
///
/// Blank values are `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty
/// containers. A container with any entry is never blank, whatever it holds.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
    }
}

/// True when the mapping is empty or every entry is blank (see [`is_blank`]).
///
/// Only top-level entries are checked. A single non-blank entry makes the
/// mapping non-empty regardless of its position.
pub fn is_empty(map: &Mapping) -> bool {
    map.values().all(is_blank)
}
