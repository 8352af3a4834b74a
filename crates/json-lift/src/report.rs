//! Diagnostic sink for field failures.
//!
//! Field reads never fail loudly: the functional result is always a plain
//! `Option`. What went wrong is handed to a [`Reporter`] supplied by the
//! caller, so decoding stays free of hidden global state.

use std::cell::RefCell;

use json_lift_value::{Object, Value};

use crate::error::{Cause, DecodeError, FieldError};

/// One field failure, borrowed from the object being decoded.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    pub object: &'a Object,
    pub error: &'a FieldError,
}

impl<'a> Diagnostic<'a> {
    pub fn new(object: &'a Object, error: &'a FieldError) -> Self {
        Self { object, error }
    }

    pub fn key(&self) -> &'a str {
        self.error.key()
    }

    pub fn cause(&self) -> Cause {
        self.error.cause()
    }

    /// The offending value, present only for [`Cause::FailedConversion`].
    pub fn value(&self) -> Option<&'a Value> {
        self.object.get(self.error.key())
    }
}

/// Receives field diagnostics in the order fields are read.
pub trait Reporter {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

impl<F> Reporter for F
where
    F: Fn(&Diagnostic<'_>),
{
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Default reporter: one `tracing` warning per diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic.cause() {
            Cause::MissingKey => tracing::warn!(
                key = diagnostic.key(),
                object = ?diagnostic.object,
                "object is missing key"
            ),
            Cause::FailedConversion => tracing::warn!(
                key = diagnostic.key(),
                value = ?diagnostic.value(),
                "failed to convert value for key"
            ),
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _diagnostic: &Diagnostic<'_>) {}
}

/// Keeps every reported error, in report order. Not `Sync`.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: RefCell<Vec<FieldError>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.errors.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors.into_inner()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        self.errors.borrow_mut().push(diagnostic.error.clone());
    }
}

/// Keeps only the first reported error; backs `Decodable::try_decode`.
#[derive(Debug, Default)]
pub(crate) struct FirstFailure {
    first: RefCell<Option<FieldError>>,
}

impl FirstFailure {
    pub(crate) fn into_error(self) -> DecodeError {
        match self.first.into_inner() {
            Some(error) => DecodeError::Field(error),
            None => DecodeError::Rejected,
        }
    }
}

impl Reporter for FirstFailure {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        let mut first = self.first.borrow_mut();
        if first.is_none() {
            *first = Some(diagnostic.error.clone());
        }
    }
}
