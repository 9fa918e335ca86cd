//! Wall-clock time of day and `HH:mm` arithmetic.
//!
//! A [`ClockTime`] is stored as minutes since midnight and is always in
//! `0..1440`. There is no wraparound at parse time: `24:00` is rejected, not
//! read as midnight. Durations are plain minute counts and are formatted with
//! [`format_duration`], which does not wrap.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Picker input: exactly two hour digits.
static PICKER_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").unwrap());

/// General input: one or two hour digits.
static CLOCK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").unwrap());

/// Errors from parsing or manipulating clock times.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The text is not shaped like `HH:mm`.
    #[error("invalid time format: {value:?}")]
    InvalidFormat { value: String },

    /// Hour outside `0..=23`.
    #[error("hour must be between 0 and 23, got {hour}")]
    HourOutOfRange { hour: u32 },

    /// Minute outside `0..=59`.
    #[error("minute must be between 0 and 59, got {minute}")]
    MinuteOutOfRange { minute: u32 },

    /// Rounding interval was zero or negative.
    #[error("rounding interval must be positive, got {interval}")]
    InvalidInterval { interval: i64 },
}

/// A time of day with minute precision.
///
/// Ordering follows minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// `00:00`.
    pub const MIDNIGHT: Self = Self(0);

    /// `23:59`, the last representable minute.
    pub const LAST_MINUTE: Self = Self(MINUTES_PER_DAY - 1);

    /// Creates a clock time from minutes since midnight.
    ///
    /// Returns `None` for values of a full day or more.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Creates a clock time from an hour and minute pair.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ClockError> {
        if hour > 23 {
            return Err(ClockError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ClockError::MinuteOutOfRange { minute });
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "hour and minute are bounded above, result is below 1440"
        )]
        let minutes = (hour * 60 + minute) as u16;
        Ok(Self(minutes))
    }

    /// Parses a time picker value.
    ///
    /// Pickers always emit two-digit hours, so `9:00` is rejected here while
    /// [`ClockTime::parse`] accepts it.
    pub fn parse_picker(text: &str) -> Result<Self, ClockError> {
        Self::parse_with(&PICKER_TIME_RE, text)
    }

    /// Parses `H:mm` or `HH:mm`, trimming surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, ClockError> {
        Self::parse_with(&CLOCK_TIME_RE, text)
    }

    fn parse_with(pattern: &Regex, text: &str) -> Result<Self, ClockError> {
        let trimmed = text.trim();
        let Some(caps) = pattern.captures(trimmed) else {
            return Err(ClockError::InvalidFormat {
                value: text.to_string(),
            });
        };
        Self::from_hm(ascii_digits(&caps[1]), ascii_digits(&caps[2]))
    }

    /// Minutes since midnight, `0..1440`.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Shifts the time by `delta` minutes, wrapping around midnight in both
    /// directions.
    #[must_use]
    pub fn add_minutes(self, delta: i64) -> Self {
        let day = i64::from(MINUTES_PER_DAY);
        let wrapped = (i64::from(self.0) + delta.rem_euclid(day)).rem_euclid(day);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "rem_euclid keeps the value in 0..1440"
        )]
        let minutes = wrapped as u16;
        Self(minutes)
    }

    /// Rounds to the nearest multiple of `interval` minutes, halves rounding up.
    ///
    /// A result that lands on or past midnight wraps into the next day, so
    /// `23:45` at 30 minutes becomes `00:00`.
    pub fn round_to_interval(self, interval: i64) -> Result<Self, ClockError> {
        if interval <= 0 {
            return Err(ClockError::InvalidInterval { interval });
        }
        let minutes = i128::from(self.0);
        let interval = i128::from(interval);
        let steps = (2 * minutes + interval) / (2 * interval);
        let rounded = (steps * interval).rem_euclid(i128::from(MINUTES_PER_DAY));
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rem_euclid keeps the value in 0..1440"
        )]
        let rounded = rounded as i64;
        Ok(Self::MIDNIGHT.add_minutes(rounded))
    }

    /// Inclusive range check on both ends.
    #[must_use]
    pub fn is_between(self, start: Self, end: Self) -> bool {
        start <= self && self <= end
    }
}

/// Value of a short run of ASCII digits already matched by a time pattern.
fn ascii_digits(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

// ========== String-level operations ==========

/// Strict parse for time picker values (`HH:mm` only).
pub fn parse_picker_time(text: &str) -> Result<ClockTime, ClockError> {
    ClockTime::parse_picker(text)
}

/// General parse accepting one or two hour digits.
pub fn parse_clock_time(text: &str) -> Result<ClockTime, ClockError> {
    ClockTime::parse(text)
}

/// Normalizes `H:mm` input to zero-padded `HH:mm`.
pub fn normalize(text: &str) -> Result<String, ClockError> {
    ClockTime::parse(text).map(|time| time.to_string())
}

/// Formats a minute count as `HH:mm`.
///
/// Negative values clamp to `00:00`. Values of a day or more are not wrapped,
/// so two full days format as `48:00`.
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Adds `delta` minutes to a picker time, wrapping around midnight.
pub fn add_minutes(time: &str, delta: i64) -> Result<String, ClockError> {
    let time = ClockTime::parse_picker(time)?;
    Ok(time.add_minutes(delta).to_string())
}

/// Rounds a picker time to the nearest `interval` minutes.
pub fn round_to_interval(time: &str, interval: i64) -> Result<String, ClockError> {
    let time = ClockTime::parse_picker(time)?;
    Ok(time.round_to_interval(interval)?.to_string())
}

/// Compares two picker times.
pub fn compare_times(a: &str, b: &str) -> Result<Ordering, ClockError> {
    let a = ClockTime::parse_picker(a)?;
    let b = ClockTime::parse_picker(b)?;
    Ok(a.cmp(&b))
}

/// Returns `true` if `time` lies within `[start, end]`.
///
/// Any unparsable input yields `false`.
pub fn is_in_range(time: &str, start: &str, end: &str) -> bool {
    match (
        ClockTime::parse_picker(time),
        ClockTime::parse_picker(start),
        ClockTime::parse_picker(end),
    ) {
        (Ok(time), Ok(start), Ok(end)) => time.is_between(start, end),
        _ => false,
    }
}
