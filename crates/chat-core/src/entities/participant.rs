//! Participant entity - a named chat actor tracked by its last heartbeat

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Participant entity
///
/// The name is the only identifier; there is no numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    /// Milliseconds since the Unix epoch of the last join or heartbeat
    pub last_heartbeat: i64,
}

impl Participant {
    /// Create a participant whose heartbeat is `at`
    pub fn new(name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_heartbeat: at.timestamp_millis(),
        }
    }

    /// A participant is stale when its heartbeat is strictly older than `cutoff_ms`
    #[inline]
    pub fn is_stale(&self, cutoff_ms: i64) -> bool {
        self.last_heartbeat < cutoff_ms
    }
}

/// Epoch-millisecond cutoff below which a heartbeat counts as stale
pub fn staleness_cutoff(now: DateTime<Utc>, stale_after: Duration) -> i64 {
    let window = i64::try_from(stale_after.as_millis()).unwrap_or(i64::MAX);
    now.timestamp_millis().saturating_sub(window)
}
