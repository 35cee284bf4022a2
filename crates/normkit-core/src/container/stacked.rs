use serde_json::Value;

use super::Mapping;
use crate::errors::{NormError, Result};

/// Transpose parallel field sequences into one mapping per row.
///
/// Repeated form groups (`first-name[]`, `last-name[]`) arrive as a mapping of
/// equal-length sequences; row `i` of the result maps every key to the
/// `i`-th element of its sequence. The first sequence fixes the row count.
///
/// # Errors
///
/// - `NotASequence` if any value is not an array
/// - `InconsistentLengths` if any sequence differs in length from the first
///
/// ```
/// use normkit_core::container::normalize_stacked;
/// use serde_json::json;
///
/// let input = json!({"first": ["A", "B"], "last": ["X", "Y"]});
/// let rows = normalize_stacked(input.as_object().unwrap()).unwrap();
/// assert_eq!(serde_json::Value::Object(rows[1].clone()), json!({"first": "B", "last": "Y"}));
/// ```
pub fn normalize_stacked(stacked: &Mapping) -> Result<Vec<Mapping>> {
    let mut columns = Vec::with_capacity(stacked.len());
    for (key, value) in stacked {
        match value {
            Value::Array(items) => columns.push((key, items)),
            _ => return Err(NormError::NotASequence { key: key.clone() }),
        }
    }

    let Some(rows) = columns.first().map(|(_, items)| items.len()) else {
        return Ok(Vec::new());
    };

    if let Some((key, items)) = columns.iter().find(|(_, items)| items.len() != rows) {
        return Err(NormError::InconsistentLengths {
            key: (*key).clone(),
            expected: rows,
            actual: items.len(),
        });
    }

    Ok((0..rows)
        .map(|i| {
            columns
                .iter()
                .map(|(key, items)| ((*key).clone(), items[i].clone()))
                .collect()
        })
        .collect())
}
