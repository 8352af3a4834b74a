//! Field accessor.
//!
//! [`try_field`] classifies a read as a value, a missing key or a failed
//! conversion. [`read_field`] collapses that into an `Option`, sending the
//! classification to a [`Reporter`] unless the field is optional.

use json_lift_value::{Object, Value};

use crate::codec::Decodable;
use crate::error::FieldError;
use crate::report::{Diagnostic, Reporter};

/// Reads `key` from `object` through `convert`.
pub fn try_field<'a, T, F>(object: &'a Object, key: &str, convert: F) -> Result<T, FieldError>
where
    F: FnOnce(&'a Value) -> Option<T>,
{
    let value = object.get(key).ok_or_else(|| FieldError::MissingKey {
        key: key.to_owned(),
    })?;
    convert(value).ok_or_else(|| FieldError::FailedConversion {
        key: key.to_owned(),
        found: value.kind(),
    })
}

/// Reads one field, reporting the failure cause unless `optional`.
///
/// Both causes yield `None`. An optional field holding the wrong kind of
/// value (including an explicit null) is indistinguishable from an absent
/// one.
pub fn read_field<'a, T, F>(
    object: &'a Object,
    key: &str,
    convert: F,
    optional: bool,
    reporter: &dyn Reporter,
) -> Option<T>
where
    F: FnOnce(&'a Value) -> Option<T>,
{
    match try_field(object, key, convert) {
        Ok(value) => Some(value),
        Err(error) => {
            if !optional {
                reporter.report(&Diagnostic::new(object, &error));
            }
            None
        }
    }
}

/// An object bound to the reporter its reads go to.
#[derive(Clone, Copy)]
pub struct Fields<'a> {
    object: &'a Object,
    reporter: &'a dyn Reporter,
}

impl<'a> Fields<'a> {
    pub fn new(object: &'a Object, reporter: &'a dyn Reporter) -> Self {
        Self { object, reporter }
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }

    pub fn required<T, F>(&self, key: &str, convert: F) -> Option<T>
    where
        F: FnOnce(&'a Value) -> Option<T>,
    {
        read_field(self.object, key, convert, false, self.reporter)
    }

    pub fn optional<T, F>(&self, key: &str, convert: F) -> Option<T>
    where
        F: FnOnce(&'a Value) -> Option<T>,
    {
        read_field(self.object, key, convert, true, self.reporter)
    }

    /// Required nested object decoded as `T`.
    ///
    /// A missing key or a non-object value is reported like any required
    /// field; failures inside the nested object are reported by `T` itself.
    pub fn nested<T: Decodable>(&self, key: &str) -> Option<T> {
        let object = self.required(key, Value::as_object)?;
        T::decode_with(object, self.reporter)
    }
}
