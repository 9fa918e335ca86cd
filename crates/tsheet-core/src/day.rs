//! Per-day summaries combining classification, status, and progress.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{TimeLogEntry, total_duration};
use crate::calendar::{DateSpan, DayKind, WorkWeek, classify_day};
use crate::progress::{ProgressResult, progress};
use crate::status::{AttendanceStatus, ResolveContext, ResolvedStatus, resolve_raw_statuses};

/// One stored attendance record for a date.
///
/// The status is kept as the raw stored string so unrecognized values reach
/// the resolver instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub status: String,
    #[serde(default)]
    pub entries: Vec<TimeLogEntry>,
    #[serde(default)]
    pub has_document: bool,
}

impl AttendanceRecord {
    fn parsed_status(&self) -> Option<AttendanceStatus> {
        self.status.parse().ok()
    }
}

/// Everything shown for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub kind: DayKind,
    /// `None` when the date has no records.
    pub status: Option<ResolvedStatus>,
    /// `None` on weekends without records.
    pub progress: Option<ProgressResult>,
}

/// Summarizes one date's records against a target in minutes.
pub fn summarize_day(
    date: NaiveDate,
    records: &[AttendanceRecord],
    target_minutes: i64,
    week: &WorkWeek,
) -> DaySummary {
    let kind = classify_day(date, !records.is_empty(), week);

    let statuses: Vec<&str> = records.iter().map(|r| r.status.as_str()).collect();
    let ctx = ResolveContext {
        has_document: absence_documented(records),
        work_minutes: minutes_for(records, |status| status == Some(AttendanceStatus::Work)),
    };
    let status = resolve_raw_statuses(&statuses, &ctx);

    let day_progress = (kind != DayKind::Weekend)
        .then(|| progress(minutes_for(records, |_| true), target_minutes));

    DaySummary {
        date,
        kind,
        status,
        progress: day_progress,
    }
}

/// Summarizes every date in `span`, in order.
pub fn summarize_span(
    span: &DateSpan,
    records_by_date: &BTreeMap<NaiveDate, Vec<AttendanceRecord>>,
    target_minutes: i64,
    week: &WorkWeek,
) -> Vec<DaySummary> {
    span.days()
        .map(|date| {
            let records = records_by_date.get(&date).map_or(&[][..], Vec::as_slice);
            summarize_day(date, records, target_minutes, week)
        })
        .collect()
}

fn minutes_for(
    records: &[AttendanceRecord],
    include: impl Fn(Option<AttendanceStatus>) -> bool,
) -> i64 {
    records
        .iter()
        .filter(|record| include(record.parsed_status()))
        .map(|record| total_duration(&record.entries))
        .sum()
}

/// Document flag of the absence that wins resolution.
///
/// Sickness outranks reserves, so only its records count when both exist.
fn absence_documented(records: &[AttendanceRecord]) -> bool {
    let has = |wanted: AttendanceStatus| {
        records.iter().any(|r| r.parsed_status() == Some(wanted))
    };
    let absence = if has(AttendanceStatus::Sickness) {
        AttendanceStatus::Sickness
    } else if has(AttendanceStatus::Reserves) {
        AttendanceStatus::Reserves
    } else {
        return false;
    };
    records
        .iter()
        .any(|r| r.parsed_status() == Some(absence) && r.has_document)
}
