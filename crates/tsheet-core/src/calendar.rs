//! Calendar dates: inclusive spans and working-day classification.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Date format used on the wire (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, trimming surrounding whitespace.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
}

/// An inclusive span of calendar dates, used for multi-day absences.
///
/// A span whose end precedes its start is empty rather than negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Number of days covered, counting both endpoints.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// Every date in the span, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Inclusive day count between two `YYYY-MM-DD` dates.
///
/// Returns 0 if either date fails to parse or `end` precedes `start`.
pub fn day_count(start: &str, end: &str) -> i64 {
    DateSpan::parse(start, end).map_or_else(
        |err| {
            tracing::debug!(start, end, error = %err, "unparsable date span");
            0
        },
        |span| span.day_count(),
    )
}

/// The designated non-working days of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWeek {
    pub weekend: Vec<Weekday>,
}

impl Default for WorkWeek {
    fn default() -> Self {
        Self {
            weekend: vec![Weekday::Fri, Weekday::Sat],
        }
    }
}

impl WorkWeek {
    #[must_use]
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }
}

/// Classification of a date before status resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayKind {
    /// Non-working day with no records.
    Weekend,
    /// Working day with no records.
    Missing,
    /// At least one record exists.
    Reported,
}

/// Classifies a date by whether it has records and whether it is a weekend.
///
/// A weekend date with records is `Reported`.
pub fn classify_day(date: NaiveDate, has_records: bool, week: &WorkWeek) -> DayKind {
    if has_records {
        DayKind::Reported
    } else if week.is_weekend(date) {
        DayKind::Weekend
    } else {
        DayKind::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========== Day counting ==========

    #[test]
    fn single_day_span_counts_one() {
        assert_eq!(day_count("2025-03-10", "2025-03-10"), 1);
    }

    #[test]
    fn span_counts_both_endpoints() {
        assert_eq!(day_count("2025-03-10", "2025-03-14"), 5);
        // Across a month boundary in a leap year
        assert_eq!(day_count("2024-02-28", "2024-03-01"), 3);
    }

    #[test]
    fn reversed_span_counts_zero() {
        assert_eq!(day_count("2025-03-14", "2025-03-10"), 0);
        assert_eq!(day_count("2025-03-11", "2025-03-10"), 0);
    }

    #[test]
    fn unparsable_dates_count_zero() {
        assert_eq!(day_count("2025-02-30", "2025-03-01"), 0);
        assert_eq!(day_count("yesterday", "2025-03-01"), 0);
        assert_eq!(day_count("2025-03-01", ""), 0);
    }

    #[test]
    fn days_iterates_the_span() {
        let span = DateSpan::new(date(2025, 1, 30), date(2025, 2, 2));
        let days: Vec<_> = span.days().collect();
        assert_eq!(
            days,
            vec![date(2025, 1, 30), date(2025, 1, 31), date(2025, 2, 1), date(2025, 2, 2)]
        );
        assert_eq!(i64::try_from(days.len()).unwrap(), span.day_count());
    }

    #[test]
    fn reversed_span_has_no_days() {
        let span = DateSpan::new(date(2025, 2, 2), date(2025, 1, 30));
        assert_eq!(span.days().count(), 0);
    }

    // ========== Classification ==========

    #[test]
    fn empty_weekend_day_is_weekend() {
        // Mar 14, 2025 is a Friday
        let friday = date(2025, 3, 14);
        assert_eq!(classify_day(friday, false, &WorkWeek::default()), DayKind::Weekend);
    }

    #[test]
    fn empty_working_day_is_missing() {
        // Mar 16, 2025 is a Sunday, a working day by default
        let sunday = date(2025, 3, 16);
        assert_eq!(classify_day(sunday, false, &WorkWeek::default()), DayKind::Missing);
    }

    #[test]
    fn records_always_win_over_weekend() {
        let saturday = date(2025, 3, 15);
        assert_eq!(classify_day(saturday, true, &WorkWeek::default()), DayKind::Reported);
    }

    #[test]
    fn custom_weekend_days() {
        let week = WorkWeek {
            weekend: vec![Weekday::Sat, Weekday::Sun],
        };
        assert_eq!(classify_day(date(2025, 3, 16), false, &week), DayKind::Weekend);
        assert_eq!(classify_day(date(2025, 3, 14), false, &week), DayKind::Missing);
    }
}
