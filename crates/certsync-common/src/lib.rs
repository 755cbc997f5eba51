pub mod errors;

pub use errors::{CertSyncError, ConfigError, DebounceError, WatchError};

pub type Result<T> = std::result::Result<T, CertSyncError>;
