use auto_impl::auto_impl;
use chrono::Utc;

/// A source of wall-clock time, in seconds since the Unix epoch.
///
/// Slot and epoch estimation reads the current time through this trait so that it
/// can be driven by a fixed timestamp in tests or when replaying historical data.
#[auto_impl(&, Box, Arc)]
pub trait Clock {
    /// The current Unix timestamp, in seconds.
    fn now(&self) -> i64;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock stopped at a given Unix timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    pub const fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
