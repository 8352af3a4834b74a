//! Capability contracts implemented by domain types.

use json_lift_value::{Object, Value};

use crate::error::DecodeError;
use crate::functional::lift_object;
use crate::report::{FirstFailure, Reporter, TracingReporter};

/// A type that can be rebuilt from an [`Object`].
///
/// Implementations compose [`crate::read_field`] with the chaining
/// operators; absence of a valid decode is `None`, never a panic.
pub trait Decodable: Sized {
    fn decode_with(object: &Object, reporter: &dyn Reporter) -> Option<Self>;

    /// Decodes with diagnostics sent to [`TracingReporter`].
    fn decode(object: &Object) -> Option<Self> {
        Self::decode_with(object, &TracingReporter)
    }

    /// Decodes and returns the first reported field failure as the error.
    fn try_decode(object: &Object) -> Result<Self, DecodeError> {
        let first = FirstFailure::default();
        match Self::decode_with(object, &first) {
            Some(value) => Ok(value),
            None => Err(first.into_error()),
        }
    }
}

/// A type that renders itself into an [`Object`].
///
/// Every field appears as a key; absent optional fields map to
/// [`Value::Null`].
pub trait Encodable {
    fn encode(&self) -> Object;

    fn to_value(&self) -> Value {
        Value::Object(self.encode())
    }
}

/// Decodes `T` from `value` when it is an object; `None` otherwise.
///
/// Unlike [`crate::Fields::nested`], a missing or non-object value is not
/// reported. Failures inside the nested object are still reported by `T`,
/// even when the caller feeds the result to
/// [`Apply::ap_optional`](crate::Apply::ap_optional) and the outer decode
/// succeeds with the field absent.
pub fn decode_nested<T: Decodable>(value: Option<&Value>, reporter: &dyn Reporter) -> Option<T> {
    lift_object(|object| T::decode_with(object, reporter), value)
}
