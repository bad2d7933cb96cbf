//! Error propagation for results that arrive after the function returned.
//!
//! - [`Outcome`] holds a value or any error, and turns back into an
//!   `anyhow::Result` with [`Outcome::resolve`].
//! - [`SpecificOutcome`] does the same for one concrete error type and widens
//!   into [`Outcome`].
//! - [`UnexpectedError`] and [`UniversalError`] are catch-all error records.
//! - [`AsyncReturn`] and [`Completion`] carry the result back to the caller,
//!   exactly once.

// Lets `#[derive(StandardError)]` refer to `::outcome` from within this crate.
extern crate self as outcome;

pub mod callback;
pub mod error;
pub mod result;
pub mod specific;
pub mod testing;

pub use callback::{AbandonPolicy, AsyncReturn, Completion, OutcomeReturn, SharedCompletion};
pub use error::{ErrorKind, StandardError, UnexpectedError, UniversalError};
pub use macros::StandardError;
pub use result::Outcome;
pub use specific::SpecificOutcome;
