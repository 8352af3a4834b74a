//! Primitive conversion functions.
//!
//! Each function is a safe downcast: it returns `None` exactly when the
//! runtime variant of the value is not the requested kind. Nothing is
//! parsed, so `"10"` never reads as an integer.

use crate::{Array, Object, Value};

/// Signature shared by the conversion functions in this module.
pub type Conversion<T> = fn(&Value) -> Option<T>;

pub fn as_int(value: &Value) -> Option<i64> {
    value.as_i64()
}

/// Accepts both number representations; integers widen.
pub fn as_float(value: &Value) -> Option<f64> {
    value.as_f64()
}

pub fn as_text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

pub fn as_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

pub fn as_array(value: &Value) -> Option<Array> {
    value.as_array().cloned()
}

/// Object downcast, used to recurse into nested decodable types.
pub fn as_object(value: &Value) -> Option<Object> {
    value.as_object().cloned()
}

/// Lifts an element conversion to a homogeneous array conversion.
///
/// The result is `None` unless the value is an array and every element
/// converts.
pub fn as_array_of<T, F>(convert: F) -> impl Fn(&Value) -> Option<Vec<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    move |value: &Value| -> Option<Vec<T>> { value.as_array()?.iter().map(&convert).collect() }
}
