//! Change detection for certsync.
//!
//! - [`Debouncer`]: coalesces bursts of trigger calls into one delayed
//!   execution that sees only the last call's arguments
//! - [`CertWatcher`]: turns filesystem notifications for the certificate
//!   and key files into [`WatchEvent`]s

pub mod debounce;
pub mod watcher;

pub use debounce::{BoxError, Debouncer, FailureObserver, LogFailures, QuietPeriod};
pub use watcher::{CertWatcher, WatchEvent, WatchEventKind, WatchGuard};
