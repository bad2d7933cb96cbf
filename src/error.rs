//! Catch-all error records for failures that have no more specific type.
//!
//! [`UnexpectedError`] marks a programmer-logic fault: something that should
//! never happen, must not crash the process, and has to be reported.
//! [`UniversalError`] marks a deliberately unclassified failure that is safe
//! to treat as an ordinary recoverable error. Both share the same shape and
//! mechanics; only the intent differs.
use std::fmt;

use macros::StandardError as DeriveStandardError;

/// Intent carried by a catch-all error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unexpected,
    Universal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "unexpected error",
            ErrorKind::Universal => "universal error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error with a human-readable description and optional advisory texts.
///
/// Usually implemented with `#[derive(StandardError)]`, which also provides
/// `Display`, `std::error::Error` and the builder methods. `Default` gives an
/// error without a description; `Display` then falls back to the failure
/// reason, then to the kind of the error.
pub trait StandardError: std::error::Error + Send + Sync + 'static {
    const KIND: ErrorKind;

    fn error_description(&self) -> Option<&str>;

    /// Why the failure happened.
    fn failure_reason(&self) -> Option<&str>;

    /// What the user may do to recover.
    fn recovery_suggestion(&self) -> Option<&str>;

    /// Reference to further help.
    fn help_anchor(&self) -> Option<&str>;
}

/// A logic failure arising from a programmer mistake. It should not be
/// recoverable at all, but the program rather continues than crashes.
/// Receivers must not discard it silently and should report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, DeriveStandardError)]
#[standard_error(unexpected)]
pub struct UnexpectedError {
    description: Option<String>,
    failure_reason: Option<String>,
    recovery_suggestion: Option<String>,
    help_anchor: Option<String>,
}

/// A generic failure with no better classification, propagated like any
/// other error.
#[derive(Debug, Clone, Default, PartialEq, Eq, DeriveStandardError)]
#[standard_error(universal)]
pub struct UniversalError {
    description: Option<String>,
    failure_reason: Option<String>,
    recovery_suggestion: Option<String>,
    help_anchor: Option<String>,
}

/// Finds the intent of a catch-all error anywhere in the context chain of
/// `error`. Returns `None` for every other error type.
pub fn kind_of(error: &anyhow::Error) -> Option<ErrorKind> {
    error.chain().find_map(|cause| {
        if cause.is::<UnexpectedError>() {
            Some(ErrorKind::Unexpected)
        } else if cause.is::<UniversalError>() {
            Some(ErrorKind::Universal)
        } else {
            None
        }
    })
}
