use std::collections::HashSet;

use super::Mapping;

fn key_set<K: AsRef<str>>(keys: &[K]) -> HashSet<&str> {
    keys.iter().map(AsRef::as_ref).collect()
}

/// Copy of `attributes` without the `hidden` keys.
///
/// Keys in `hidden` that the mapping does not have are ignored.
///
/// ```
/// use normkit_core::container::except;
/// use serde_json::json;
///
/// let person = json!({"name": "Alfa", "sex": "Male", "age": 23});
/// let trimmed = except(person.as_object().unwrap(), &["age"]);
/// assert_eq!(serde_json::Value::Object(trimmed), json!({"name": "Alfa", "sex": "Male"}));
/// ```
pub fn except<K: AsRef<str>>(attributes: &Mapping, hidden: &[K]) -> Mapping {
    let hidden = key_set(hidden);
    attributes
        .iter()
        .filter(|(key, _)| !hidden.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copy of `attributes` restricted to the `shown` keys, in the mapping's order.
pub fn only<K: AsRef<str>>(attributes: &Mapping, shown: &[K]) -> Mapping {
    let shown = key_set(shown);
    attributes
        .iter()
        .filter(|(key, _)| shown.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn abc() -> Mapping {
        json!({"a": 1, "b": 2, "c": 3})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_except_preserves_order() {
        let out = except(&abc(), &["b"]);
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_only_uses_mapping_order_not_key_order() {
        let out = only(&abc(), &["c", "a"]);
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(except(&abc(), &["zzz"]), abc());
        assert!(only(&abc(), &["zzz"]).is_empty());
    }

    #[test]
    fn test_owned_key_lists() {
        let keys = vec!["a".to_string()];
        assert_eq!(only(&abc(), &keys).len(), 1);
    }
}
