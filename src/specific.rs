use crate::result::Outcome;

/// [`Outcome`] with the error type fixed to `E`.
///
/// Choose it when callers should match exhaustively over a closed set of
/// errors. There is deliberately no `resolve`: handing `E` to `?` would erase
/// its type. Match on the variants instead, or widen with
/// [`SpecificOutcome::into_outcome`] when the specific type no longer matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificOutcome<T, E> {
    Failed(E),
    Succeeded(T),
}

impl<T, E> SpecificOutcome<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    pub fn success(value: T) -> Self {
        SpecificOutcome::Succeeded(value)
    }

    pub fn failure(error: E) -> Self {
        SpecificOutcome::Failed(error)
    }

    /// Runs `f` once and captures the value or the `E` it failed with.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match f() {
            Ok(value) => SpecificOutcome::Succeeded(value),
            Err(error) => SpecificOutcome::Failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SpecificOutcome::Succeeded(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts to `Option<T>`, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            SpecificOutcome::Failed(_) => None,
            SpecificOutcome::Succeeded(value) => Some(value),
        }
    }

    /// Widens into an [`Outcome`]. The error stays downcastable to `E`.
    pub fn into_outcome(self) -> Outcome<T> {
        match self {
            SpecificOutcome::Failed(error) => Outcome::Failed(anyhow::Error::new(error)),
            SpecificOutcome::Succeeded(value) => Outcome::Succeeded(value),
        }
    }
}

impl<T, E> From<Result<T, E>> for SpecificOutcome<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        SpecificOutcome::from_fn(|| result)
    }
}

impl<T, E> From<SpecificOutcome<T, E>> for Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(specific: SpecificOutcome<T, E>) -> Self {
        specific.into_outcome()
    }
}
