//! Debounce wrapper around an async action.
//!
//! Every [`Debouncer::trigger`] cancels the pending execution, if any, and
//! arms a new one that fires once the quiet period passes without another
//! trigger. Execution is always deferred onto the runtime; errors from the
//! action go to a [`FailureObserver`] and never back to the caller.

mod debouncer;
mod observer;
mod quiet_period;


pub use debouncer::{BoxError, Debouncer};
pub use observer::{FailureObserver, LogFailures};
pub use quiet_period::QuietPeriod;
