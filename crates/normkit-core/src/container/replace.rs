use super::Mapping;

fn replace_literal(subject: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        subject.to_string()
    } else {
        subject.replace(search, replacement)
    }
}

/// Rewrite every key by replacing each literal occurrence of `search`.
///
/// Values are untouched. When two rewritten keys collide the later entry's
/// value wins and keeps the slot of the first one. An empty `search` leaves
/// every key as it is.
///
/// ```
/// use normkit_core::container::replace_key;
/// use serde_json::json;
///
/// let form = json!({":type_address": "Foo", ":type_city": "Baz"});
/// let out = replace_key(form.as_object().unwrap(), ":type", "user");
/// assert_eq!(out.keys().collect::<Vec<_>>(), vec!["user_address", "user_city"]);
/// ```
pub fn replace_key(input: &Mapping, search: &str, replacement: &str) -> Mapping {
    let mut out = Mapping::new();
    for (key, value) in input {
        out.insert(replace_literal(key, search, replacement), value.clone());
    }
    out
}

/// Replace each literal occurrence of `search` in every string, keeping order.
pub fn replace_value<S: AsRef<str>>(input: &[S], search: &str, replacement: &str) -> Vec<String> {
    input
        .iter()
        .map(|value| replace_literal(value.as_ref(), search, replacement))
        .collect()
}
