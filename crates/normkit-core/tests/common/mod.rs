use normkit_core::Mapping;
use serde_json::Value;

/// Unwrap a `json!` object literal into a mapping
///
/// # Panics
///
/// Panics if `value` is not an object.
#[allow(dead_code)]
pub fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Keys of a mapping in iteration order
#[allow(dead_code)]
pub fn keys(map: &Mapping) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}
