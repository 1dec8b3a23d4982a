//! Post-fetch utilities: canonical response shape, and the properties of an
//! entity worth showing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

// ------------- Response Shape -------------
/// The payload shapes an API may answer with, in the order they are recognized.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `null`
    Empty,
    /// `[...]`
    Bare(Vec<Value>),
    /// `{"value": [...], ...}`; the other keys are not kept
    Wrapped(Vec<Value>),
    /// `{"entities": [...], ...}`; already canonical, the other keys are kept
    Normalized { entities: Vec<Value>, rest: Map<String, Value> },
    /// any other object or scalar
    Single(Value),
}

impl ResponseShape {
    /// The checks run in a fixed order: an object carrying both an array
    /// `value` and an array `entities` is a `Wrapped` response.
    pub fn classify(response: Value) -> Self {
        match response {
            Value::Null => ResponseShape::Empty,
            Value::Array(items) => ResponseShape::Bare(items),
            Value::Object(mut object) => {
                if object.get("value").is_some_and(Value::is_array) {
                    if let Some(Value::Array(items)) = object.remove("value") {
                        return ResponseShape::Wrapped(items);
                    }
                }
                if object.get("entities").is_some_and(Value::is_array) {
                    if let Some(Value::Array(entities)) = object.remove("entities") {
                        return ResponseShape::Normalized { entities, rest: object };
                    }
                }
                ResponseShape::Single(Value::Object(object))
            }
            scalar => ResponseShape::Single(scalar),
        }
    }
}

// ------------- Normalized Response -------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    pub entities: Vec<Value>,
    /// Top-level keys preserved from an already-normalized response.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl NormalizedResponse {
    pub fn into_value(self) -> Value {
        let mut object = self.rest;
        object.insert("entities".to_string(), Value::Array(self.entities));
        Value::Object(object)
    }
}

impl From<ResponseShape> for NormalizedResponse {
    fn from(shape: ResponseShape) -> Self {
        let (entities, rest) = match shape {
            ResponseShape::Empty => (Vec::new(), Map::new()),
            ResponseShape::Bare(items) | ResponseShape::Wrapped(items) => (items, Map::new()),
            ResponseShape::Normalized { entities, rest } => (entities, rest),
            ResponseShape::Single(item) => (vec![item], Map::new()),
        };
        NormalizedResponse { entities, rest }
    }
}

/// Brings any decoded payload into the `{ "entities": [...] }` shape.
pub fn normalize(response: Value) -> NormalizedResponse {
    ResponseShape::classify(response).into()
}

// ------------- Property Filter -------------
/// Scalar properties of `entity`, without `@odata` annotations, ordered by key.
/// Anything that is not an object has no displayable properties.
pub fn select_display_properties(entity: &Value) -> Vec<(String, Value)> {
    let Some(object) = entity.as_object() else {
        return Vec::new();
    };
    let mut properties: Vec<(String, Value)> = object
        .iter()
        .filter(|(key, value)| !key.starts_with("@odata") && is_displayable(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    properties.sort_by(|(a, _), (b, _)| display_order(a, b));
    properties
}

fn is_displayable(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Array(_) | Value::Object(_))
}

// Collation-like: punctuation and symbols before digits before letters,
// case-insensitive; on a tie lowercase sorts before uppercase.
fn display_order(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| b.cmp(a))
}

fn collation_key(key: &str) -> Vec<(u8, char)> {
    key.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            let rank = if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
            (rank, c)
        })
        .collect()
}
