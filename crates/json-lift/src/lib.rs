//! Applicative decode/encode combinators between untyped JSON values and
//! typed domain values.
//!
//! A domain type implements [`Decodable`] by reading each field with
//! [`read_field`] (or a [`Fields`] reader) and feeding the results to a
//! curried constructor through [`lift`] and [`apply`]. Decoding is
//! fail-fast: the first absent or mistyped required field makes the whole
//! result `None`. Field failures are classified as
//! [`Cause::MissingKey`] or [`Cause::FailedConversion`] and sent to an
//! injected [`Reporter`].
//!
//! ```
//! use json_lift::convert::{as_int, as_text};
//! use json_lift::{curry, lift, read_field, Apply, Decodable, Object, Reporter};
//!
//! #[derive(Debug, PartialEq)]
//! struct Tag {
//!     id: i64,
//!     label: Option<String>,
//! }
//!
//! impl Decodable for Tag {
//!     fn decode_with(object: &Object, reporter: &dyn Reporter) -> Option<Self> {
//!         lift(
//!             curry!(|id: i64, label: Option<String>| Tag { id, label }),
//!             read_field(object, "id", as_int, false, reporter),
//!         )
//!         .ap_optional(read_field(object, "label", as_text, true, reporter))
//!     }
//! }
//!
//! let object = json_lift::json::object_from_json_value(serde_json::json!({"id": 1})).unwrap();
//! assert_eq!(Tag::decode(&object), Some(Tag { id: 1, label: None }));
//! ```

mod codec;
mod error;
mod field;
mod functional;
mod report;

pub use json_lift_value::{convert, json, Array, Conversion, Number, Object, Value, ValueKind};

pub use codec::{decode_nested, Decodable, Encodable};
pub use error::{Cause, DecodeError, FieldError};
pub use field::{read_field, try_field, Fields};
pub use functional::{apply, apply_optional, lift, lift_object, lift_optional, Apply};
pub use report::{CollectingReporter, Diagnostic, Reporter, SilentReporter, TracingReporter};
