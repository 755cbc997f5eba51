//! Core debouncer implementation.

use certsync_common::DebounceError;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use super::observer::{FailureObserver, LogFailures};
use super::quiet_period::QuietPeriod;

/// Error type debounced actions are erased to.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Action<A> = Arc<dyn Fn(A) -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// The scheduled-but-not-yet-run call. At most one timer is armed.
#[derive(Default)]
struct PendingCall {
    /// Bumped on every trigger and on teardown; a timer only fires while
    /// its generation is still current.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Coalesces bursts of [`trigger`](Self::trigger) calls into a single
/// execution of the wrapped action, using the arguments of the last call.
///
/// Multiple arguments are passed as a tuple; use `()` for none. Dropping
/// the debouncer cancels a pending execution. An execution that has
/// already started is left to finish.
pub struct Debouncer<A> {
    action: Action<A>,
    quiet: QuietPeriod,
    observer: Arc<dyn FailureObserver>,
    pending: Arc<Mutex<PendingCall>>,
    runtime: Handle,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Wrap `action`, logging its failures through [`LogFailures`].
    ///
    /// Must be called from within a tokio runtime; the debouncer schedules
    /// onto that runtime for its whole life.
    pub fn new<F, Fut, E>(quiet: QuietPeriod, action: F) -> Result<Self, DebounceError>
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        Self::with_observer(quiet, action, Arc::new(LogFailures))
    }

    /// Wrap `action`, reporting its failures to `observer`.
    pub fn with_observer<F, Fut, E>(
        quiet: QuietPeriod,
        action: F,
        observer: Arc<dyn FailureObserver>,
    ) -> Result<Self, DebounceError>
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;
        let action: Action<A> = Arc::new(move |args: A| {
            let run = action(args);
            async move {
                let result: Result<(), BoxError> = run.await.map_err(Into::into);
                result
            }
            .boxed()
        });

        Ok(Self {
            action,
            quiet,
            observer,
            pending: Arc::new(Mutex::new(PendingCall::default())),
            runtime,
        })
    }

    /// Schedule the action with `args`, replacing any pending schedule.
    ///
    /// Never runs the action inline and never fails.
    pub fn trigger(&self, args: A) {
        let mut pending = lock(&self.pending);
        if let Some(timer) = pending.timer.take() {
            trace!("debounce: discarding pending call");
            timer.abort();
        }
        pending.generation = pending.generation.wrapping_add(1);

        let generation = pending.generation;
        let slot = Arc::clone(&self.pending);
        let action = Arc::clone(&self.action);
        let observer = Arc::clone(&self.observer);
        let runtime = self.runtime.clone();
        let quiet = self.quiet.as_duration();

        pending.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(quiet).await;

            {
                let mut pending = lock(&slot);
                if pending.generation != generation {
                    return;
                }
                pending.timer = None;
            }

            // Run detached so a later trigger can never abort an
            // execution that has already started.
            let run = action(args);
            runtime.spawn(async move {
                if let Err(e) = run.await {
                    observer.action_failed(&*e);
                }
            });
        }));
    }
}

impl<A> Debouncer<A> {
    /// Quiet period this debouncer waits for.
    pub fn quiet_period(&self) -> QuietPeriod {
        self.quiet
    }

    /// Whether an execution is currently scheduled.
    pub fn is_pending(&self) -> bool {
        lock(&self.pending).timer.is_some()
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let mut pending = lock(&self.pending);
        pending.generation = pending.generation.wrapping_add(1);
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("quiet", &self.quiet)
            .field("pending", &self.is_pending())
            .finish()
    }
}

fn lock(pending: &Mutex<PendingCall>) -> MutexGuard<'_, PendingCall> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}
