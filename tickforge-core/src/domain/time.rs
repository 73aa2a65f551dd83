//! Logical event time.
//!
//! The simulation is ordered purely by these timestamps — nanosecond
//! resolution, monotonically meaningful, never tied to wall-clock scheduling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical timestamp: nanoseconds since the Unix epoch.
///
/// The sole ordering key for events. Producers in the live path may capture
/// wall time via [`Timestamp::now`]; replayed streams carry their own.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(self) -> i64 {
        self.0
    }

    /// Capture the current wall-clock time as a logical timestamp.
    ///
    /// Convenience for live-path producers; the engines never call this.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}
