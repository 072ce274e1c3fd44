//! Wall-clock access.
//!
//! Code that needs "now" takes a [`Clock`] so tests can pin time with a
//! [`FixedClock`]. [`SystemClock`] reads the host clock on every call and
//! never caches.

use chrono::Utc;

use super::duration::Duration;
use super::instant::Instant;

/// Source of the current instant.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Host wall clock, millisecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_millis(Utc::now().timestamp_millis() as f64)
    }
}

/// Clock frozen at a chosen instant.
///
/// ```
/// use u_quant::time::{Clock, FixedClock, Instant, MINUTE, Duration};
/// let clock = FixedClock::new(Instant::from_millis(0.0));
/// let later = clock.advanced_by(Duration::from_millis(MINUTE));
/// assert_eq!(later.now().millis(), 60_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    now: Instant,
}

impl FixedClock {
    /// Creates a clock that always reports `now`.
    pub fn new(now: Instant) -> Self {
        Self { now }
    }

    /// Returns a copy of this clock moved forward by `by`.
    pub fn advanced_by(self, by: Duration) -> Self {
        Self { now: self.now + by }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }
}

/// Reads the system clock.
///
/// Equivalent to `SystemClock.now()`.
pub fn now() -> Instant {
    SystemClock.now()
}
