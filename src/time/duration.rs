//! Durations built from counts of named units, projected onto the clock.
//!
//! ```
//! use u_quant::time::{in_past, Clock, DurationExt, FixedClock, Instant};
//! let clock = FixedClock::new(Instant::from_millis(1e12));
//! let span = 2.0_f64.years() + 3.0_f64.days() + 5.0_f64.hours();
//! let then = in_past(span, &clock);
//! assert!(((clock.now() - then) - span).millis().abs() < 1e-3);
//! ```

use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use super::clock::{Clock, SystemClock};
use super::instant::Instant;
use super::units::TimeUnit;

/// Signed elapsed time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Duration(f64);

impl Duration {
    /// No elapsed time.
    pub const ZERO: Duration = Duration(0.0);

    /// Wraps a millisecond count.
    pub const fn from_millis(millis: f64) -> Self {
        Self(millis)
    }

    /// Length in milliseconds.
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// Length expressed in `unit`, e.g. `as_unit(TimeUnit::Day)`.
    pub fn as_unit(self, unit: TimeUnit) -> f64 {
        self.0 / unit.millis()
    }

    /// Magnitude, dropping the sign.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// The instant this long before the system clock's now.
    pub fn in_past(self) -> Instant {
        in_past(self, &SystemClock)
    }

    /// The instant this long after the system clock's now.
    pub fn in_future(self) -> Instant {
        in_future(self, &SystemClock)
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self(value.as_secs_f64() * 1000.0)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Duration {
        Duration(self.0 * rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

/// `count` units as a duration: `count * unit.millis()`.
///
/// ```
/// use u_quant::time::{to_duration, TimeUnit};
/// assert_eq!(to_duration(1.5, TimeUnit::Minute).millis(), 90_000.0);
/// ```
pub fn to_duration(count: f64, unit: TimeUnit) -> Duration {
    Duration(count * unit.millis())
}

/// `clock.now() - duration`.
pub fn in_past<C: Clock + ?Sized>(duration: Duration, clock: &C) -> Instant {
    clock.now() - duration
}

/// `clock.now() + duration`.
pub fn in_future<C: Clock + ?Sized>(duration: Duration, clock: &C) -> Instant {
    clock.now() + duration
}

/// Treats `millis` as an absolute instant since the epoch.
pub fn to_instant(millis: f64) -> Instant {
    Instant::from_millis(millis)
}

/// Unit constructors on plain counts: `3.0_f64.days()`.
pub trait DurationExt {
    /// `self` seconds.
    fn seconds(self) -> Duration;
    /// `self` minutes.
    fn minutes(self) -> Duration;
    /// `self` hours.
    fn hours(self) -> Duration;
    /// `self` days.
    fn days(self) -> Duration;
    /// `self` weeks.
    fn weeks(self) -> Duration;
    /// `self` mean months.
    fn months(self) -> Duration;
    /// `self` mean years.
    fn years(self) -> Duration;
    /// `self` decades.
    fn decades(self) -> Duration;
    /// `self` centuries.
    fn centuries(self) -> Duration;
}

impl DurationExt for f64 {
    fn seconds(self) -> Duration {
        to_duration(self, TimeUnit::Second)
    }

    fn minutes(self) -> Duration {
        to_duration(self, TimeUnit::Minute)
    }

    fn hours(self) -> Duration {
        to_duration(self, TimeUnit::Hour)
    }

    fn days(self) -> Duration {
        to_duration(self, TimeUnit::Day)
    }

    fn weeks(self) -> Duration {
        to_duration(self, TimeUnit::Week)
    }

    fn months(self) -> Duration {
        to_duration(self, TimeUnit::Month)
    }

    fn years(self) -> Duration {
        to_duration(self, TimeUnit::Year)
    }

    fn decades(self) -> Duration {
        to_duration(self, TimeUnit::Decade)
    }

    fn centuries(self) -> Duration {
        to_duration(self, TimeUnit::Century)
    }
}
