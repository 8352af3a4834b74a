//! Interop with [`serde_json::Value`], the tree produced by the external
//! parser and consumed by the external serializer.

use serde_json::{Map, Number as JsonNumber, Value as JsonValue};

use crate::{Number, Object, Value};

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(number_from_json(&n)),
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Object(object_from_json(obj)),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(Number::Int(i)) => JsonValue::Number(i.into()),
            // Non-finite floats have no JSON form.
            Value::Number(Number::Float(f)) => {
                JsonNumber::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
            }
            Value::Text(s) => JsonValue::String(s),
            Value::Array(arr) => JsonValue::Array(arr.into_iter().map(JsonValue::from).collect()),
            Value::Object(obj) => JsonValue::Object(object_to_json(obj)),
        }
    }
}

/// Integers that fit `i64` stay integers; everything else (including
/// `u64` beyond `i64::MAX`) becomes a float.
fn number_from_json(n: &JsonNumber) -> Number {
    match n.as_i64() {
        Some(i) => Number::Int(i),
        None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

pub fn object_from_json(map: Map<String, JsonValue>) -> Object {
    map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

pub fn object_to_json(object: Object) -> Map<String, JsonValue> {
    object
        .into_iter()
        .map(|(k, v)| (k, JsonValue::from(v)))
        .collect()
}

/// Object view of a parsed document; `None` when the root is not an object.
pub fn object_from_json_value(v: JsonValue) -> Option<Object> {
    match v {
        JsonValue::Object(map) => Some(object_from_json(map)),
        _ => None,
    }
}
