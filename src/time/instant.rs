//! Absolute points in time as milliseconds since the Unix epoch.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use super::duration::Duration;
use crate::error::{Error, Result};

/// Milliseconds since 1970-01-01T00:00:00Z.
///
/// Fractional milliseconds are kept, since month and year lengths are not
/// whole numbers. A non-finite value marks an invalid instant; arithmetic
/// on it stays invalid and it formats as an empty relative phrase.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Instant(f64);

impl Instant {
    /// The Unix epoch.
    pub const EPOCH: Instant = Instant(0.0);

    /// An instant that refers to no point in time.
    pub const INVALID: Instant = Instant(f64::NAN);

    /// Wraps a millisecond count.
    pub const fn from_millis(millis: f64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch.
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// `false` for NaN or infinite millis.
    pub fn is_valid(self) -> bool {
        self.0.is_finite()
    }

    /// Converts a chrono timestamp, truncated to whole milliseconds.
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis() as f64)
    }

    /// Converts to a chrono timestamp.
    ///
    /// Fractional milliseconds are truncated toward zero. Returns `None`
    /// for invalid instants and for values outside chrono's range.
    ///
    /// ```
    /// use u_quant::time::Instant;
    /// let dt = Instant::from_millis(86_400_000.0).to_datetime().unwrap();
    /// assert_eq!(dt.to_rfc3339(), "1970-01-02T00:00:00+00:00");
    /// assert!(Instant::INVALID.to_datetime().is_none());
    /// ```
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        let millis = self.0.trunc();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Parses an RFC 3339 timestamp such as `2012-02-13T10:04:59Z`.
    ///
    /// ```
    /// use u_quant::time::Instant;
    /// let t = Instant::parse("1970-01-01T00:00:01.5Z").unwrap();
    /// assert_eq!(t.millis(), 1_500.0);
    /// assert!(Instant::parse("13/02/2012").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(input.trim())
            .map(|parsed| Self::from_datetime(parsed.with_timezone(&Utc)))
            .map_err(|err| {
                debug!(input, error = %err, "timestamp parse failed");
                Error::InvalidTimestamp {
                    input: input.to_owned(),
                    reason: err.to_string(),
                }
            })
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value)
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => f.write_str("Invalid Date"),
        }
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Duration {
        Duration::from_millis(self.0 - rhs.0)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant(self.0 + rhs.millis())
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Duration) -> Instant {
        Instant(self.0 - rhs.millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::units::DAY;

    #[test]
    fn test_validity() {
        assert!(Instant::EPOCH.is_valid());
        assert!(!Instant::INVALID.is_valid());
        assert!(!Instant::from_millis(f64::INFINITY).is_valid());
    }

    #[test]
    fn test_datetime_round_trip() {
        let dt = DateTime::parse_from_rfc3339("2012-02-13T10:04:59.250Z")
            .unwrap()
            .with_timezone(&Utc);
        let instant = Instant::from(dt);
        assert_eq!(instant.to_datetime(), Some(dt));
    }

    #[test]
    fn test_to_datetime_truncates_fraction() {
        let dt = Instant::from_millis(1_999.9).to_datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_999);
    }

    #[test]
    fn test_to_datetime_out_of_range() {
        assert!(Instant::from_millis(1e300).to_datetime().is_none());
    }

    #[test]
    fn test_parse_offset_normalised_to_utc() {
        let a = Instant::parse("2012-02-13T10:04:59+01:00").unwrap();
        let b = Instant::parse("2012-02-13T09:04:59Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_error() {
        let err = "not a date".parse::<Instant>().unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp { ref input, .. } if input == "not a date"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00.000Z");
        assert_eq!(Instant::INVALID.to_string(), "Invalid Date");
    }

    #[test]
    fn test_arithmetic() {
        let start = Instant::from_millis(1_000.0);
        let later = start + Duration::from_millis(DAY);
        assert_eq!((later - start).millis(), DAY);
        assert_eq!(later - Duration::from_millis(DAY), start);
        assert!(!(Instant::INVALID + Duration::from_millis(1.0)).is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Instant::from_millis(42.5)).unwrap();
        assert_eq!(json, "42.5");
    }
}
