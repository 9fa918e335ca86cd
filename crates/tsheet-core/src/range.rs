//! Time range validation and overlap detection.
//!
//! Ranges never cross midnight. A range is valid only when its end is
//! strictly after its start, and two ranges that merely touch at a boundary
//! do not overlap, so back-to-back segments are legal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::ClockTime;

/// Validation errors for a reported time range.
///
/// The messages are shown to users as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// End is equal to or before start.
    #[error("End time must be after start time")]
    EndNotAfterStart,

    /// A bound failed to parse, including `24:00` and later.
    #[error("Invalid time format")]
    InvalidFormat,
}

/// A validated, non-empty span within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

/// Unchecked form used for deserialization.
#[derive(Deserialize)]
struct RawRange {
    start: ClockTime,
    end: ClockTime,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// Creates a range after checking that `end` is after `start`.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self, RangeError> {
        validate_order(start, end)?;
        Ok(Self { start, end })
    }

    /// Parses and validates a range from `HH:mm` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        let start = ClockTime::parse(start).map_err(|_| RangeError::InvalidFormat)?;
        let end = validate_no_midnight_crossing(end)?;
        Self::new(start, end)
    }

    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }

    /// Length in minutes; always positive.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end.minutes()) - i64::from(self.start.minutes())
    }

    /// Half-open overlap test. Touching ranges do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        bounds_overlap((self.start, self.end), (other.start, other.end))
    }
}

fn bounds_overlap(a: (ClockTime, ClockTime), b: (ClockTime, ClockTime)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// Fails when `end` is not strictly after `start`.
pub fn validate_order(start: ClockTime, end: ClockTime) -> Result<(), RangeError> {
    if end <= start {
        return Err(RangeError::EndNotAfterStart);
    }
    Ok(())
}

/// Rejects end times at or beyond `24:00`.
///
/// Shifts never cross midnight, so these are format errors rather than
/// next-day times.
pub fn validate_no_midnight_crossing(end: &str) -> Result<ClockTime, RangeError> {
    ClockTime::parse(end).map_err(|_| RangeError::InvalidFormat)
}

/// Validates a start/end pair as typed into a form.
pub fn validate_time_range(start: &str, end: &str) -> Result<TimeRange, RangeError> {
    TimeRange::parse(start, end)
}

/// Duration of a validated range in minutes.
pub fn calculate_duration_minutes(start: &str, end: &str) -> Result<i64, RangeError> {
    TimeRange::parse(start, end).map(|range| range.duration_minutes())
}

/// Overlap test on raw bounds.
///
/// Bounds are compared as given without an ordering check. Returns `false`
/// if any bound fails to parse.
pub fn time_ranges_overlap(a_start: &str, a_end: &str, b_start: &str, b_end: &str) -> bool {
    let parsed = (
        ClockTime::parse(a_start),
        ClockTime::parse(a_end),
        ClockTime::parse(b_start),
        ClockTime::parse(b_end),
    );
    match parsed {
        (Ok(a_start), Ok(a_end), Ok(b_start), Ok(b_end)) => {
            bounds_overlap((a_start, a_end), (b_start, b_end))
        }
        _ => false,
    }
}

/// Returns every index pair `(i, j)` with `i < j` whose ranges overlap.
pub fn find_overlaps(ranges: &[TimeRange]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in ranges.iter().enumerate() {
        for (j, b) in ranges.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
