use certsync_common::DebounceError;
use std::fmt;
use std::time::Duration;

/// Minimum stretch of inactivity before a debounced action fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct QuietPeriod(Duration);

impl QuietPeriod {
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Build from a millisecond count as found in config files.
    pub fn from_millis(ms: i64) -> Result<Self, DebounceError> {
        u64::try_from(ms)
            .map(|ms| Self(Duration::from_millis(ms)))
            .map_err(|_| DebounceError::InvalidQuietPeriod(format!("{ms}ms is negative")))
    }

    /// Build from fractional seconds. NaN, infinite, and negative values
    /// are rejected.
    pub fn from_secs_f64(secs: f64) -> Result<Self, DebounceError> {
        Duration::try_from_secs_f64(secs)
            .map(Self)
            .map_err(|e| DebounceError::InvalidQuietPeriod(format!("{secs}s: {e}")))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl From<Duration> for QuietPeriod {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl TryFrom<i64> for QuietPeriod {
    type Error = DebounceError;

    fn try_from(ms: i64) -> Result<Self, Self::Error> {
        Self::from_millis(ms)
    }
}

impl fmt::Display for QuietPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0.as_millis())
    }
}
