use std::error::Error;
use tracing::error;

/// Receives failures of debounced actions.
///
/// The debouncer itself never inspects or retries a failure; it only hands
/// it here so it is visible somewhere.
pub trait FailureObserver: Send + Sync {
    fn action_failed(&self, error: &(dyn Error + Send + Sync + 'static));
}

/// Default observer: logs the failure at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailures;

impl FailureObserver for LogFailures {
    fn action_failed(&self, error: &(dyn Error + Send + Sync + 'static)) {
        error!(error = %error, "debounced action failed");
    }
}
