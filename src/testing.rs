//! Helpers for asserting that deferred results are delivered exactly once.
use crate::callback::Completion;
use anyhow::{bail, Context};
use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

/// Records every invocation of the callbacks it hands out.
///
/// ```
/// use outcome::{testing::CallProbe, Outcome};
///
/// let probe = CallProbe::<Outcome<i32>>::new();
/// probe.completion().succeed(7);
/// assert_eq!(probe.single().unwrap().ok(), Some(7));
/// ```
pub struct CallProbe<R> {
    state: Arc<(Mutex<Vec<R>>, Condvar)>,
}

impl<R> CallProbe<R>
where
    R: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            state: Arc::new((Mutex::new(Vec::new()), Condvar::new())),
        }
    }

    /// Raw callback recording its argument. May be handed out many times,
    /// all of them count towards the same probe.
    pub fn callback(&self) -> impl FnOnce(R) + Send + 'static {
        let state = self.state.clone();
        move |result| {
            let (calls, delivered) = &*state;
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(result);
            delivered.notify_all();
        }
    }

    pub fn completion(&self) -> Completion<R> {
        Completion::new(self.callback()).named("probe")
    }

    /// Number of invocations recorded so far.
    pub fn calls(&self) -> usize {
        self.recorded().len()
    }

    /// Blocks until at least `count` invocations were recorded or `timeout`
    /// elapsed. Returns the number recorded.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let (_, delivered) = &*self.state;
        let mut calls = self.recorded();

        while calls.len() < count {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            calls = delivered
                .wait_timeout(calls, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        calls.len()
    }

    /// Takes the only recorded result. Fails if there were zero or several.
    pub fn single(&self) -> anyhow::Result<R> {
        let mut calls = self.recorded();
        if calls.len() != 1 {
            bail!("expected exactly one invocation, got {}", calls.len());
        }
        calls.pop().context("recorded invocation vanished")
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<R>> {
        self.state.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> Default for CallProbe<R>
where
    R: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for CallProbe<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
