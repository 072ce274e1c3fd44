//! English relative-time phrases ("3 days ago", "2 hours ahead").
//!
//! The distance between now and the target is matched against the table
//! below, top to bottom, and the first row that fits wins.
//!
//! | Distance | Phrase |
//! |---|---|
//! | `< MINUTE` | `⌊d / SECOND⌋ seconds` |
//! | `< 2 × MINUTE` | `1 second` |
//! | `< HOUR` | `⌊d / MINUTE⌋ minutes` |
//! | `< 2 × HOUR` | `1 minute` |
//! | `< DAY` | `⌊d / HOUR⌋ hours` |
//! | `< 2 × DAY` | `1 hour` |
//! | `< MONTH` | `⌊d / DAY⌋ days` |
//! | `< 2 × MONTH` | `1 day` |
//! | `< YEAR` | `⌊d / MONTH⌋ months` |
//! | `< 2 × YEAR` | `1 month` |
//! | otherwise | `more than a year` |
//!
//! Each singular row sits one unit *below* the plural row that follows it,
//! so 90 seconds reads as "1 second" and 90 minutes as "1 minute". The
//! table is kept as is; callers depend on these exact strings. Decades and
//! centuries collapse into "more than a year".

use std::fmt;

use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::instant::Instant;
use super::units::{DAY, HOUR, MINUTE, MONTH, SECOND, YEAR};

/// Which side of now the target lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Target is strictly before now.
    Past,
    /// Target is now or later.
    Future,
}

impl Direction {
    /// `"ago"` or `"ahead"`.
    pub const fn qualifier(self) -> &'static str {
        match self {
            Direction::Past => "ago",
            Direction::Future => "ahead",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}

/// Describes `target` relative to `now`.
///
/// Returns an empty string if either instant is invalid.
///
/// ```
/// use u_quant::time::{format_relative_between, Instant};
/// let now = Instant::from_millis(1_000_000_000.0);
/// let target = Instant::from_millis(1_000_000_000.0 - 45_000.0);
/// assert_eq!(format_relative_between(target, now), "45 seconds ago");
/// assert_eq!(format_relative_between(now, target), "45 seconds ahead");
/// assert_eq!(format_relative_between(Instant::INVALID, now), "");
/// ```
pub fn format_relative_between(target: Instant, now: Instant) -> String {
    let (direction, diff) = if now.millis() > target.millis() {
        (Direction::Past, now.millis() - target.millis())
    } else {
        (Direction::Future, target.millis() - now.millis())
    };

    if !diff.is_finite() {
        debug!(
            target_ms = target.millis(),
            now_ms = now.millis(),
            "no relative phrase for invalid instant"
        );
        return String::new();
    }

    format!("{} {}", phrase(diff), direction.qualifier())
}

/// Describes `target` relative to the system clock.
pub fn format_relative(target: Instant) -> String {
    RelativeTimeFormatter::new(SystemClock).format(target)
}

/// Relative-time formatter bound to a clock.
///
/// ```
/// use u_quant::time::{FixedClock, Instant, RelativeTimeFormatter, DAY};
/// let now = Instant::from_millis(100.0 * DAY);
/// let formatter = RelativeTimeFormatter::new(FixedClock::new(now));
/// assert_eq!(formatter.format(Instant::from_millis(97.5 * DAY)), "2 days ago");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelativeTimeFormatter<C = SystemClock> {
    clock: C,
}

impl<C: Clock> RelativeTimeFormatter<C> {
    /// Creates a formatter reading "now" from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Describes `target` relative to the clock's current instant.
    pub fn format(&self, target: Instant) -> String {
        format_relative_between(target, self.clock.now())
    }

    /// The clock this formatter reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn phrase(diff: f64) -> String {
    let whole = |unit: f64| (diff / unit).floor() as u64;

    if diff < MINUTE {
        format!("{} seconds", whole(SECOND))
    } else if diff < MINUTE * 2.0 {
        "1 second".to_owned()
    } else if diff < HOUR {
        format!("{} minutes", whole(MINUTE))
    } else if diff < HOUR * 2.0 {
        "1 minute".to_owned()
    } else if diff < DAY {
        format!("{} hours", whole(HOUR))
    } else if diff < DAY * 2.0 {
        "1 hour".to_owned()
    } else if diff < MONTH {
        format!("{} days", whole(DAY))
    } else if diff < MONTH * 2.0 {
        "1 day".to_owned()
    } else if diff < YEAR {
        format!("{} months", whole(MONTH))
    } else if diff < YEAR * 2.0 {
        "1 month".to_owned()
    } else {
        "more than a year".to_owned()
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn direction_is_symmetric(offset in 0.001_f64..1e12) {
            let now = Instant::from_millis(1e12);
            let past = format_relative_between(Instant::from_millis(1e12 - offset), now);
            let future = format_relative_between(Instant::from_millis(1e12 + offset), now);
            prop_assert!(past.ends_with(" ago"), "{}", past);
            prop_assert!(future.ends_with(" ahead"), "{}", future);
        }

        #[test]
        fn valid_instants_never_empty(a in -1e13_f64..1e13, b in -1e13_f64..1e13) {
            let phrase = format_relative_between(Instant::from_millis(a), Instant::from_millis(b));
            prop_assert!(!phrase.is_empty());
        }
    }
}
