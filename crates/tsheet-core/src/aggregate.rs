//! Summing a day's reported work segments.
//!
//! Reports mix two input styles: an explicit duration, or a start/end pair.
//! Aggregation normalizes both to minutes. It is lenient: an entry whose
//! range is missing or invalid counts as zero instead of failing the total.

use serde::{Deserialize, Serialize};

use crate::range::{RangeError, TimeRange};

/// One reported work segment.
///
/// The variant is chosen by the reporting type configured for the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimeLogEntry {
    /// Explicit duration in minutes.
    #[serde(rename_all = "camelCase")]
    Duration { duration_minutes: u32 },

    /// Raw start/end bounds as entered.
    Range {
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        end: Option<String>,
    },
}

impl TimeLogEntry {
    /// Builds a duration entry.
    #[must_use]
    pub const fn duration(minutes: u32) -> Self {
        Self::Duration {
            duration_minutes: minutes,
        }
    }

    /// Builds a start/end entry.
    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::Range {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Strict check for form submission.
    ///
    /// Duration entries are always valid; range entries must carry both
    /// bounds and pass range validation.
    pub fn validate(&self) -> Result<(), RangeError> {
        match self {
            Self::Duration { .. } => Ok(()),
            Self::Range { start, end } => {
                let (Some(start), Some(end)) = (start, end) else {
                    return Err(RangeError::InvalidFormat);
                };
                TimeRange::parse(start, end).map(|_| ())
            }
        }
    }

    /// The validated range of a start/end entry, if it has one.
    pub fn time_range(&self) -> Option<TimeRange> {
        match self {
            Self::Duration { .. } => None,
            Self::Range { start, end } => {
                TimeRange::parse(start.as_deref()?, end.as_deref()?).ok()
            }
        }
    }

    /// Minutes this entry contributes to a total. Never fails.
    pub fn effective_minutes(&self) -> i64 {
        match self {
            Self::Duration { duration_minutes } => i64::from(*duration_minutes),
            Self::Range { start, end } => self.time_range().map_or_else(
                || {
                    tracing::debug!(?start, ?end, "range entry contributes no time");
                    0
                },
                |range| range.duration_minutes(),
            ),
        }
    }
}

/// Sums the effective minutes of all entries, uncapped.
pub fn total_duration(entries: &[TimeLogEntry]) -> i64 {
    entries.iter().map(TimeLogEntry::effective_minutes).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_entries_sum_both_styles() {
        let entries = [
            TimeLogEntry::duration(240),
            TimeLogEntry::range("09:00", "12:00"),
        ];
        assert_eq!(total_duration(&entries), 420);
    }

    #[test]
    fn empty_report_totals_zero() {
        assert_eq!(total_duration(&[]), 0);
    }

    #[test]
    fn malformed_entries_contribute_zero() {
        let entries = [
            TimeLogEntry::duration(60),
            TimeLogEntry::range("10:00", "09:00"),
            TimeLogEntry::range("bad", "12:00"),
            TimeLogEntry::Range {
                start: Some("13:00".to_string()),
                end: None,
            },
            TimeLogEntry::range("14:00", "14:30"),
        ];
        assert_eq!(total_duration(&entries), 90);
    }

    #[test]
    fn total_is_not_capped_at_a_day() {
        let entries = [TimeLogEntry::duration(1000), TimeLogEntry::duration(1000)];
        assert_eq!(total_duration(&entries), 2000);
    }

    #[test]
    fn validate_is_strict_where_aggregation_is_lenient() {
        assert_eq!(TimeLogEntry::duration(0).validate(), Ok(()));
        assert_eq!(TimeLogEntry::range("09:00", "10:00").validate(), Ok(()));
        assert_eq!(
            TimeLogEntry::range("10:00", "10:00").validate(),
            Err(RangeError::EndNotAfterStart)
        );
        let missing = TimeLogEntry::Range {
            start: None,
            end: Some("10:00".to_string()),
        };
        assert_eq!(missing.validate(), Err(RangeError::InvalidFormat));
        assert_eq!(missing.effective_minutes(), 0);
    }

    #[test]
    fn entries_deserialize_by_type_tag() {
        let json = r#"[
            {"type": "duration", "durationMinutes": 240},
            {"type": "range", "start": "9:00", "end": "12:00"},
            {"type": "range"}
        ]"#;
        let entries: Vec<TimeLogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0], TimeLogEntry::duration(240));
        assert_eq!(entries[1], TimeLogEntry::range("9:00", "12:00"));
        assert_eq!(total_duration(&entries), 420);
    }

    #[test]
    fn negative_duration_is_rejected_at_the_boundary() {
        let result: Result<TimeLogEntry, _> =
            serde_json::from_str(r#"{"type": "duration", "durationMinutes": -5}"#);
        assert!(result.is_err());
    }
}
