//! json-lift-value - the untyped value tree decoded from and encoded to.
//!
//! Provides [`Value`], the closed union every document crossing the
//! json-lift boundary is expressed in, together with the primitive
//! conversion functions in [`convert`] that pull typed data back out of it.
//!
//! Trees are normally produced by an external parser; [`json`] converts
//! to and from [`serde_json::Value`] for that purpose.

pub mod convert;
pub mod json;
mod value;

pub use convert::Conversion;
pub use value::{Array, Number, Object, Value, ValueKind};
