//! Millisecond magnitudes for calendar-ish units.
//!
//! Month and year are mean Gregorian lengths, so `MONTH * 12 == YEAR` only
//! approximately and neither lines up with a civil calendar.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One second, in milliseconds.
pub const SECOND: f64 = 1000.0;
/// 60 seconds.
pub const MINUTE: f64 = SECOND * 60.0;
/// 60 minutes.
pub const HOUR: f64 = MINUTE * 60.0;
/// 24 hours.
pub const DAY: f64 = HOUR * 24.0;
/// 7 days.
pub const WEEK: f64 = DAY * 7.0;
/// Mean month, 30.4368499 days.
pub const MONTH: f64 = DAY * 30.4368499;
/// Mean tropical year, 365.242199 days.
pub const YEAR: f64 = DAY * 365.242199;
/// 10 years.
pub const DECADE: f64 = YEAR * 10.0;
/// 100 years.
pub const CENTURY: f64 = YEAR * 100.0;

/// A named unit of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
}

impl TimeUnit {
    /// Every unit, shortest first.
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
        TimeUnit::Decade,
        TimeUnit::Century,
    ];

    /// Length of one unit in milliseconds.
    ///
    /// ```
    /// use u_quant::time::{TimeUnit, HOUR};
    /// assert_eq!(TimeUnit::Hour.millis(), HOUR);
    /// assert_eq!(TimeUnit::Day.millis(), 86_400_000.0);
    /// ```
    pub const fn millis(self) -> f64 {
        match self {
            TimeUnit::Second => SECOND,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Week => WEEK,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => YEAR,
            TimeUnit::Decade => DECADE,
            TimeUnit::Century => CENTURY,
        }
    }

    /// Lowercase singular name.
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
            TimeUnit::Decade => "decade",
            TimeUnit::Century => "century",
        }
    }

    /// Lowercase plural name.
    pub const fn plural(self) -> &'static str {
        match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
            TimeUnit::Decade => "decades",
            TimeUnit::Century => "centuries",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Accepts singular or plural names, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == wanted || unit.plural() == wanted)
            .ok_or_else(|| {
                tracing::debug!(input = s, "unrecognised time unit");
                Error::UnknownTimeUnit(s.to_owned())
            })
    }
}
