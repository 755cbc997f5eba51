//! Filesystem watcher for the certificate and key files.
//!
//! Watches the parent directories with the `notify` crate, because ACME
//! clients and editors usually replace files by rename, and forwards
//! matching events over a tokio channel.

mod cert_watcher;
mod event;


pub use cert_watcher::{CertWatcher, WatchGuard};
pub use event::{classify, WatchEvent, WatchEventKind};
