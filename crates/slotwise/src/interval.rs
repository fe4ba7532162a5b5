//! Half-open minute-of-day intervals.
//!
//! [`Interval`] is the value type everything else is built from: an
//! immutable `[start, end)` range of minutes within a single day. Bounds are
//! validated at every construction site, including serde deserialization, so
//! downstream stages never see an interval outside the day.

use crate::error::{Result, SlotError};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of minutes in a day. Every interval lives within `[0, DAY_MINUTES]`.
pub const DAY_MINUTES: u32 = 24 * 60;

/// A half-open range of minutes within a single day: `[start, end)`.
///
/// Ordering is by start, ties broken by end, which is what the derived
/// lexicographic order over the fields produces. An interval is never
/// mutated; every transformation builds a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Bounds", into = "Bounds")]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// The whole day, `[0, DAY_MINUTES)`.
    pub const WHOLE_DAY: Interval = Interval {
        start: 0,
        end: DAY_MINUTES,
    };

    /// Build an interval from its minute bounds.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::InvalidInterval` when `start > end` or either
    /// bound lies past the end of the day. Bounds are never clamped.
    pub fn from_bounds(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        if end > DAY_MINUTES {
            return Err(SlotError::InvalidInterval(format!(
                "end {} is past the end of the day ({})",
                end, DAY_MINUTES
            )));
        }
        Ok(Self { start, end })
    }

    /// Build an interval from a start minute and a duration in minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start.checked_add(duration).ok_or_else(|| {
            SlotError::InvalidInterval(format!(
                "duration {} overflows from start {}",
                duration, start
            ))
        })?;
        Self::from_bounds(start, end)
    }

    /// Build an interval from wall-clock times.
    ///
    /// `NaiveTime` cannot express 24:00, so an `end` of midnight is read as
    /// the end of the day. A `00:00` to `00:00` range is the whole day.
    /// Seconds are truncated.
    pub fn from_clock_range(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let start_minute = start.hour() * 60 + start.minute();
        let mut end_minute = end.hour() * 60 + end.minute();
        if end_minute == 0 {
            end_minute = DAY_MINUTES;
        }
        Self::from_bounds(start_minute, end_minute)
    }

    /// Constructor for pipeline stages whose bounds are valid by construction.
    pub(crate) fn new_unchecked(start: u32, end: u32) -> Self {
        debug_assert!(
            start <= end && end <= DAY_MINUTES,
            "non-canonical interval bounds: [{}, {})",
            start,
            end
        );
        Self { start, end }
    }

    /// First minute covered by the interval.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// First minute past the interval.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the interval in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Two half-open intervals overlap iff each starts before the other ends.
    ///
    /// Adjacent intervals, where one ends exactly when the other starts, do
    /// not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Interval {
    /// Renders as `HH:MM-HH:MM`; the end of day renders as `24:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Wire shape for [`Interval`].
///
/// Deserialization goes through [`Interval::from_bounds`], so decoded
/// intervals satisfy the same invariant as constructed ones.
#[derive(Serialize, Deserialize)]
struct Bounds {
    start: u32,
    end: u32,
}

impl TryFrom<Bounds> for Interval {
    type Error = SlotError;

    fn try_from(bounds: Bounds) -> Result<Self> {
        Interval::from_bounds(bounds.start, bounds.end)
    }
}

impl From<Interval> for Bounds {
    fn from(interval: Interval) -> Self {
        Bounds {
            start: interval.start,
            end: interval.end,
        }
    }
}
