//! Date and time display utilities.
//!
//! This module provides wrapper types for formatting timestamps and plan
//! periods in a consistent, human-readable format.

use std::fmt;

use jiff::civil::Date;
use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A plan period formatted as `start to end` with ISO dates.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use trellis_core::display::DateRange;
///
/// let period = DateRange(date(2025, 1, 1), date(2025, 7, 1));
/// assert_eq!(format!("{period}"), "2025-01-01 to 2025-07-01");
/// ```
pub struct DateRange(pub Date, pub Date);

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.0, self.1)
    }
}
