//! Returning a value after the function has already returned.
//!
//! A function that can only produce its result later, on another thread or
//! from an event loop, takes an [`AsyncReturn`] (or a [`Completion`]) as its
//! last parameter and must call it exactly once, on every path. Calling it is
//! the function's `return`; never calling it is as fatal as never returning.
//!
//! ```
//! use outcome::{Completion, Outcome, UniversalError};
//! use std::thread;
//!
//! fn word_of_the_day(async_return: Completion<Outcome<String>>) {
//!     thread::spawn(move || {
//!         async_return.capture(|| match 1 + 1 {
//!             2 => Ok(String::from("serendipity")),
//!             _ => Err(UniversalError::new("arithmetic is broken")),
//!         });
//!     });
//! }
//!
//! let (tx, rx) = std::sync::mpsc::channel();
//! word_of_the_day(Completion::new(move |word: Outcome<String>| {
//!     tx.send(word.ok()).ok();
//! }));
//! assert_eq!(rx.recv().unwrap().as_deref(), Some("serendipity"));
//! ```
use crate::{result::Outcome, specific::SpecificOutcome};
use log::{debug, error};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
    thread,
};

/// Callback standing in for a function's return value.
pub type AsyncReturn<R> = Box<dyn FnOnce(R) + Send + 'static>;

/// The usual shape: a callback receiving a fallible result.
pub type OutcomeReturn<T> = AsyncReturn<Outcome<T>>;

/// What a [`Completion`] does when it is released without being invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbandonPolicy {
    /// Log an error and carry on.
    #[default]
    Report,
    /// Log an error, then panic unless the thread is already unwinding.
    Panic,
}

/// Move-only token wrapping an [`AsyncReturn`].
///
/// [`Completion::complete`] consumes the token, so invoking it twice does not
/// compile. Dropping it uninvoked is a defect and is reported according to
/// its [`AbandonPolicy`].
pub struct Completion<R> {
    name: &'static str,
    policy: AbandonPolicy,
    callback: Option<AsyncReturn<R>>,
}

impl<R> Completion<R> {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(R) + Send + 'static,
    {
        Self {
            name: "anonymous",
            policy: AbandonPolicy::default(),
            callback: Some(Box::new(callback)),
        }
    }

    /// Label used when logging about this completion.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn on_abandon(mut self, policy: AbandonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Delivers `result` to the wrapped callback.
    pub fn complete(mut self, result: R) {
        if let Some(callback) = self.callback.take() {
            debug!("completion `{}` delivered", self.name);
            callback(result);
        }
    }

    /// Turns the token into a handle that several racing completers can
    /// share. Only the first of them gets through.
    pub fn share(self) -> SharedCompletion<R> {
        SharedCompletion {
            inner: Arc::new(Mutex::new(Some(self))),
        }
    }
}

impl<T> Completion<Outcome<T>> {
    pub fn succeed(self, value: T) {
        self.complete(Outcome::success(value))
    }

    pub fn fail<E>(self, error: E)
    where
        E: Into<anyhow::Error>,
    {
        self.complete(Outcome::failure(error))
    }

    /// Runs `f` and delivers whatever it produced.
    pub fn capture<F, E>(self, f: F)
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        self.complete(Outcome::from_fn(f))
    }
}

impl<T, E> Completion<SpecificOutcome<T, E>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    pub fn succeed(self, value: T) {
        self.complete(SpecificOutcome::success(value))
    }

    pub fn fail(self, error: E) {
        self.complete(SpecificOutcome::failure(error))
    }
}

impl<R> From<AsyncReturn<R>> for Completion<R> {
    fn from(callback: AsyncReturn<R>) -> Self {
        Self {
            name: "anonymous",
            policy: AbandonPolicy::default(),
            callback: Some(callback),
        }
    }
}

impl<R> fmt::Debug for Completion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

impl<R> Drop for Completion<R> {
    fn drop(&mut self) {
        if self.callback.is_none() {
            return;
        }

        error!(
            "completion `{}` released without being invoked, its caller will never resume",
            self.name
        );
        if self.policy == AbandonPolicy::Panic && !thread::panicking() {
            panic!("completion `{}` released without being invoked", self.name);
        }
    }
}

/// Cloneable handle to a [`Completion`] for cases where several parties may
/// try to finish the same operation, e.g. a worker racing a cancellation.
///
/// The callback runs at most once no matter how many threads call
/// [`SharedCompletion::try_complete`]. If every handle is dropped while the
/// completion is still pending, the inner token reports the abandonment.
pub struct SharedCompletion<R> {
    inner: Arc<Mutex<Option<Completion<R>>>>,
}

impl<R> SharedCompletion<R> {
    /// Delivers `result` if nobody did yet. Returns `false` and drops
    /// `result` when another completer was first.
    pub fn try_complete(&self, result: R) -> bool {
        // The callback runs outside of the lock.
        let completion = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match completion {
            Some(completion) => {
                completion.complete(result);
                true
            }
            None => {
                debug!("completion already delivered, dropping late result");
                false
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl<R> Clone for SharedCompletion<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R> From<Completion<R>> for SharedCompletion<R> {
    fn from(completion: Completion<R>) -> Self {
        completion.share()
    }
}

impl<R> fmt::Debug for SharedCompletion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCompletion")
            .field("completed", &self.is_completed())
            .finish()
    }
}
