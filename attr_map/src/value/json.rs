//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! JSON is the interchange shape used by the file loader: every decoder
//! produces a `serde_json::Value`, which is converted here. The conversion
//! towards JSON is lossy: tuples become arrays, byte strings become arrays
//! of numbers and non-string keys are stringified.

use serde_json::{Map, Number, Value as JsonValue};

use super::cycle::{RECURSION_MARKER, Visit};
use super::{Key, Mapping, Value};
use crate::AttrError;

fn from_number(number: &Number) -> Value {
    number.as_i64().map_or_else(
        || number.as_f64().map_or(Value::Null, Value::Float),
        Value::Int,
    )
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(flag) => Self::Bool(flag),
            JsonValue::Number(number) => from_number(&number),
            JsonValue::String(text) => Self::Str(text),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => Self::Map(Mapping::from(map)),
        }
    }
}

impl From<Map<String, JsonValue>> for Mapping {
    fn from(map: Map<String, JsonValue>) -> Self {
        map.into_iter()
            .map(|(key, value)| (Key::Str(key), Value::from(value)))
            .collect()
    }
}

impl TryFrom<JsonValue> for Mapping {
    type Error = AttrError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(map) => Ok(Self::from(map)),
            other => Err(AttrError::NotAMapping {
                found: Value::from(other).type_name(),
            }),
        }
    }
}

impl Value {
    /// Convert into the natural JSON shape.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(flag) => JsonValue::Bool(*flag),
            Self::Int(number) => JsonValue::from(*number),
            Self::Float(number) => {
                Number::from_f64(*number).map_or(JsonValue::Null, JsonValue::Number)
            }
            Self::Str(text) => JsonValue::String(text.clone()),
            Self::Bytes(bytes) => bytes.iter().copied().map(JsonValue::from).collect(),
            Self::List(items) | Self::Tuple(items) => items.iter().map(Self::to_json).collect(),
            Self::Map(mapping) => mapping.to_json(),
        }
    }
}

impl Mapping {
    /// Convert into a JSON object, stringifying non-string keys. A mapping
    /// nested inside itself becomes the string `"{...}"` where it recurs.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let Some(_visit) = Visit::enter(self) else {
            return JsonValue::String(RECURSION_MARKER.to_owned());
        };
        let map: Map<String, JsonValue> = self
            .items()
            .into_iter()
            .map(|(key, value)| (key.label(), value.to_json()))
            .collect();
        JsonValue::Object(map)
    }
}
