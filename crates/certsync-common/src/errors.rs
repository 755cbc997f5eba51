use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Raised when a debouncer cannot be constructed.
///
/// This is the only failure a debouncer has; errors from the debounced
/// action never surface here.
#[derive(Debug, thiserror::Error)]
pub enum DebounceError {
    #[error("invalid quiet period: {0}")]
    InvalidQuietPeriod(String),

    #[error("no async runtime available to schedule debounced calls")]
    NoRuntime,
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("failed to initialise file watcher: {0}")]
    Init(String),

    #[error("cannot watch {path}: {reason}")]
    Path { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CertSyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Debounce(#[from] DebounceError),

    #[error(transparent)]
    Watch(#[from] WatchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
