//! Forgiving `deserialize_with` helpers.
//!
//! A query spec that is valid JSON but structurally off still decodes: the
//! malformed part degrades to its empty form instead of failing the document.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::format::number_text;

/// Strings as-is, numbers in canonical form (`1e2` is `100`), booleans by
/// their JSON text, anything else absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(match n.as_f64() {
            Some(float) if n.is_f64() => number_text(float),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Elements that fail to decode are skipped; a non-array is an empty list.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Anything that fails to decode is the default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(T::deserialize(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Entries that fail to decode are skipped; a non-object is absent.
pub fn map<'de, D, T>(deserializer: D) -> Result<Option<HashMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .filter_map(|(key, item)| T::deserialize(item).ok().map(|t| (key, t)))
                .collect(),
        ),
        _ => None,
    })
}
