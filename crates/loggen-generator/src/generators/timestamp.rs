//! Synthetic timestamps.
//!
//! These are random and unrelated to wall-clock time. Each field is drawn
//! independently, so the day is never checked against the month: February 30
//! is a valid synthetic date.

use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

pub const YEAR_RANGE: RangeInclusive<u16> = 1950..=2024;
pub const MONTH_RANGE: RangeInclusive<u8> = 1..=12;
pub const DAY_RANGE: RangeInclusive<u8> = 1..=30;
pub const HOUR_RANGE: RangeInclusive<u8> = 0..=23;
pub const MINUTE_RANGE: RangeInclusive<u8> = 0..=59;
pub const SECOND_RANGE: RangeInclusive<u8> = 0..=59;
pub const MILLISECOND_RANGE: RangeInclusive<u16> = 0..=999;

/// A random point in time, rendered as `YYYY-MM-DDThh:mm:ss.mmmZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticTimestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl SyntheticTimestamp {
    /// Draw every field uniformly from its range.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            year: rng.random_range(YEAR_RANGE),
            month: rng.random_range(MONTH_RANGE),
            day: rng.random_range(DAY_RANGE),
            hour: rng.random_range(HOUR_RANGE),
            minute: rng.random_range(MINUTE_RANGE),
            second: rng.random_range(SECOND_RANGE),
            millisecond: rng.random_range(MILLISECOND_RANGE),
        }
    }
}

impl fmt::Display for SyntheticTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
