//! Applicative chaining over `Option`.
//!
//! A constructor for an N-field type is written as N nested unary closures
//! (see [`curry!`](crate::curry)). [`lift`] feeds it the first field, then
//! each [`apply`] feeds one more. The first `None` anywhere poisons the
//! whole chain.
//!
//! Arguments are ordinary expressions, so every field is read left to right
//! before the chain short-circuits; every failing field is still reported.

use json_lift_value::{Object, Value};

/// `f(a)` when `a` is present.
pub fn lift<A, B, F>(f: F, a: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    a.map(f)
}

/// Starts a chain whose first argument is itself optional.
pub fn lift_optional<A, B, F>(f: F, a: Option<A>) -> Option<B>
where
    F: FnOnce(Option<A>) -> B,
{
    Some(f(a))
}

/// Runs an object decoder on `value` when it is an object.
pub fn lift_object<'a, B, F>(f: F, value: Option<&'a Value>) -> Option<B>
where
    F: FnOnce(&'a Object) -> Option<B>,
{
    value.and_then(Value::as_object).and_then(f)
}

/// `Some(f(a))` only when both are present.
pub fn apply<A, B, F>(f: Option<F>, a: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    match (f, a) {
        (Some(f), Some(a)) => Some(f(a)),
        _ => None,
    }
}

/// Feeds an optional argument to a function that accepts absence.
pub fn apply_optional<A, B, F>(f: Option<F>, a: Option<A>) -> Option<B>
where
    F: FnOnce(Option<A>) -> B,
{
    f.map(|f| f(a))
}

/// Method form of [`apply`] and [`apply_optional`] for fluent chains.
pub trait Apply<F> {
    fn ap<A, B>(self, a: Option<A>) -> Option<B>
    where
        F: FnOnce(A) -> B;

    fn ap_optional<A, B>(self, a: Option<A>) -> Option<B>
    where
        F: FnOnce(Option<A>) -> B;
}

impl<F> Apply<F> for Option<F> {
    fn ap<A, B>(self, a: Option<A>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        apply(self, a)
    }

    fn ap_optional<A, B>(self, a: Option<A>) -> Option<B>
    where
        F: FnOnce(Option<A>) -> B,
    {
        apply_optional(self, a)
    }
}

/// Turns an N-argument closure into N nested unary closures.
///
/// ```
/// use json_lift::curry;
///
/// let add = curry!(|a: i64, b: i64, c: i64| a + b + c);
/// assert_eq!(add(1)(2)(3), 6);
/// ```
#[macro_export]
macro_rules! curry {
    (|$arg:ident : $ty:ty| $body:expr) => {
        move |$arg: $ty| $body
    };
    (|$arg:ident : $ty:ty, $($rest:ident : $rest_ty:ty),+| $body:expr) => {
        move |$arg: $ty| $crate::curry!(|$($rest : $rest_ty),+| $body)
    };
}
