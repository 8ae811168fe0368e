//! Wall-clock access for time-derived identifiers and timestamps.

use chrono::{DateTime, Local};

/// Source of the current local time.
///
/// Mock identifiers (`TK1730284800`, `USER1730284800`, ...) and every
/// acknowledgement timestamp are derived from this clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Freezes the clock at `secs` seconds after the Unix epoch.
    ///
    /// Falls back to the epoch itself for out-of-range values.
    pub fn at_unix(secs: i64) -> Self {
        let instant = DateTime::from_timestamp(secs, 0).unwrap_or_default();
        Self(instant.with_timezone(&Local))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
