//! Time units, instants, durations, and relative-time phrases.
//!
//! Data flows one way: unit constants build a [`Duration`], a [`Clock`]
//! projects it onto an [`Instant`], and [`format_relative_between`] turns
//! the gap back into words.
//!
//! ```
//! use u_quant::time::{in_past, DurationExt, FixedClock, Instant, RelativeTimeFormatter};
//! let clock = FixedClock::new(Instant::from_millis(1e12));
//! let then = in_past(3.0_f64.hours(), &clock);
//! assert_eq!(RelativeTimeFormatter::new(clock).format(then), "3 hours ago");
//! ```

mod clock;
mod duration;
mod instant;
mod relative;
mod units;

pub use clock::{now, Clock, FixedClock, SystemClock};
pub use duration::{in_future, in_past, to_duration, to_instant, Duration, DurationExt};
pub use instant::Instant;
pub use relative::{format_relative, format_relative_between, Direction, RelativeTimeFormatter};
pub use units::{TimeUnit, CENTURY, DAY, DECADE, HOUR, MINUTE, MONTH, SECOND, WEEK, YEAR};
