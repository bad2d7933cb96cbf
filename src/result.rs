/// Either a produced value or the error that failed its production.
///
/// Used where `?` cannot carry the error, most notably when the result is
/// delivered through a callback after the producing function has already
/// returned. [`Outcome::resolve`] turns it back into an `anyhow::Result`.
#[derive(Debug)]
pub enum Outcome<T> {
    Failed(anyhow::Error),
    Succeeded(T),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Succeeded(value)
    }

    pub fn failure<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Outcome::Failed(error.into())
    }

    /// Runs `f` once and captures whatever it produced, the value or the
    /// error.
    pub fn from_fn<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        match f() {
            Ok(value) => Outcome::Succeeded(value),
            Err(error) => Outcome::Failed(error.into()),
        }
    }

    /// Returns the value or hands the stored error back to the caller's `?`.
    pub fn resolve(self) -> anyhow::Result<T> {
        match self {
            Outcome::Failed(error) => Err(error),
            Outcome::Succeeded(value) => Ok(value),
        }
    }

    /// Converts to `Option<T>`, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Failed(_) => None,
            Outcome::Succeeded(value) => Some(value),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Failed(_) => None,
            Outcome::Succeeded(value) => Some(value),
        }
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Outcome::Failed(error) => Some(error),
            Outcome::Succeeded(_) => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_fn(|| result)
    }
}

impl<T> From<Outcome<T>> for anyhow::Result<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StandardError, UniversalError};
    use std::cell::Cell;

    #[test]
    fn test_success() -> anyhow::Result<()> {
        let outcome = Outcome::from_fn(|| Ok::<_, UniversalError>(42));

        assert!(matches!(outcome, Outcome::Succeeded(42)));
        assert_eq!(outcome.value(), Some(&42));
        assert_eq!(outcome.resolve()?, 42);
        assert_eq!(Outcome::success(42).ok(), Some(42));
        Ok(())
    }

    #[test]
    fn test_failure() {
        let outcome: Outcome<i32> = Outcome::from_fn(|| Err(UniversalError::new("boom")));

        assert!(outcome.is_failure());
        let error = outcome.resolve().unwrap_err();
        let universal = error
            .downcast_ref::<UniversalError>()
            .expect("universal error");
        assert_eq!(universal.error_description(), Some("boom"));
        assert_eq!(error.to_string(), "boom");

        let outcome: Outcome<i32> = Outcome::failure(UniversalError::new("boom"));
        assert_eq!(outcome.ok(), None);
    }

    #[test]
    fn test_from_fn_runs_once() {
        let runs = Cell::new(0);
        let outcome = Outcome::from_fn(|| {
            runs.set(runs.get() + 1);
            anyhow::ensure!(runs.get() > 1, "first run fails");
            Ok("second run")
        });

        assert_eq!(runs.get(), 1);
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_result_conversions() {
        let outcome: Outcome<u8> = "7".parse::<u8>().into();
        assert_eq!(outcome.ok(), Some(7));

        let outcome: Outcome<u8> = "x".parse::<u8>().into();
        assert!(outcome
            .error()
            .map_or(false, |e| e.is::<std::num::ParseIntError>()));

        let result: anyhow::Result<u8> = Outcome::success(3).into();
        assert_eq!(result.ok(), Some(3));
    }
}
