//! Report command for day-by-day attendance summaries.
//!
//! Input is a JSON object keyed by date:
//! `{"2025-03-10": [{"status": "work", "entries": [...]}]}`.
//! Dates in the requested span without an entry are classified as weekend
//! or missing.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use tsheet_core::calendar::parse_date;
use tsheet_core::{
    AttendanceRecord, DateSpan, DayKind, DaySummary, format_duration, summarize_span,
};

use super::util::read_json;
use crate::Config;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// JSON file with records keyed by date, or `-` for stdin.
    pub records: PathBuf,
    /// First day of the report (YYYY-MM-DD).
    #[arg(long)]
    pub from: String,
    /// Last day of the report, inclusive; defaults to --from.
    #[arg(long)]
    pub to: Option<String>,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

fn day_label(summary: &DaySummary) -> String {
    match (&summary.status, summary.kind) {
        (Some(status), _) => status.label(),
        (None, DayKind::Weekend) => "weekend".to_string(),
        (None, _) => "missing".to_string(),
    }
}

/// Formats summaries as one line per day plus a total.
pub fn format_report(summaries: &[DaySummary]) -> String {
    let mut output = String::new();
    let mut reported = 0;
    let mut total = 0;

    for summary in summaries {
        let progress = summary.progress.map_or_else(
            || "-".to_string(),
            |p| {
                format!(
                    "{}/{} {}%",
                    format_duration(p.total_minutes),
                    format_duration(p.target_minutes),
                    p.percentage
                )
            },
        );
        writeln!(
            output,
            "{}  {:<28} {progress}",
            summary.date,
            day_label(summary)
        )
        .unwrap();

        if summary.kind == DayKind::Reported {
            reported += 1;
            total += summary.progress.map_or(0, |p| p.total_minutes);
        }
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Total reported: {} over {reported} day(s)",
        format_duration(total)
    )
    .unwrap();
    output
}

pub fn run<W: Write>(writer: &mut W, args: &ReportArgs, config: &Config) -> Result<()> {
    let from = parse_date(&args.from)
        .with_context(|| format!("invalid --from date: {}", args.from))?;
    let to = match &args.to {
        Some(to) => parse_date(to).with_context(|| format!("invalid --to date: {to}"))?,
        None => from,
    };
    if to < from {
        bail!("--to ({to}) must not be before --from ({from})");
    }

    let records: BTreeMap<NaiveDate, Vec<AttendanceRecord>> = read_json(&args.records)?;
    let target = config.target_minutes();
    if target == 0 {
        tracing::warn!(
            entrance = %config.entrance_time,
            exit = %config.exit_time,
            "configured target window is invalid; using 0"
        );
    }

    let span = DateSpan::new(from, to);
    let summaries = summarize_span(&span, &records, target, &config.work_week());
    tracing::debug!(days = summaries.len(), "summarized report span");

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else {
        write!(writer, "{}", format_report(&summaries))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    // Mar 10, 2025 is a Monday; Mar 14 is a Friday.
    const RECORDS: &str = r#"{
        "2025-03-10": [
            {"status": "work", "entries": [
                {"type": "duration", "durationMinutes": 240},
                {"type": "range", "start": "09:00", "end": "12:00"}
            ]}
        ],
        "2025-03-11": [
            {"status": "halfDayOff"},
            {"status": "work", "entries": [{"type": "range", "start": "13:00", "end": "17:00"}]}
        ],
        "2025-03-12": [
            {"status": "sickness", "hasDocument": false}
        ]
    }"#;

    fn run_with(from: &str, to: Option<&str>, json: bool) -> Result<String> {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("records.json");
        std::fs::write(&path, RECORDS).unwrap();
        let args = ReportArgs {
            records: path,
            from: from.to_string(),
            to: to.map(String::from),
            json,
        };
        let mut output = Vec::new();
        run(&mut output, &args, &Config::default())?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn report_covers_each_day_in_span() {
        let output = run_with("2025-03-10", Some("2025-03-14"), false).unwrap();
        assert_snapshot!(output, @r"
        2025-03-10  work                         07:00/08:00 88%
        2025-03-11  half day off + work 04:00    04:00/08:00 50%
        2025-03-12  missing document (sickness)  00:00/08:00 0%
        2025-03-13  missing                      00:00/08:00 0%
        2025-03-14  weekend                      -

        Total reported: 11:00 over 3 day(s)
        ");
    }

    #[test]
    fn report_defaults_to_a_single_day() {
        let output = run_with("2025-03-10", None, false).unwrap();
        assert!(output.starts_with("2025-03-10  work"));
        assert!(output.contains("over 1 day(s)"));
    }

    #[test]
    fn report_json_lists_summaries() {
        let output = run_with("2025-03-11", None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["date"], "2025-03-11");
        assert_eq!(value[0]["kind"], "reported");
        assert_eq!(value[0]["status"]["kind"], "halfDayOffWithWork");
        assert_eq!(value[0]["status"]["workMinutes"], 240);
        assert_eq!(value[0]["progress"]["percentage"], 50);
    }

    #[test]
    fn report_rejects_reversed_span() {
        let err = run_with("2025-03-14", Some("2025-03-10"), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--to (2025-03-10) must not be before --from (2025-03-14)"
        );
    }

    #[test]
    fn report_rejects_bad_date() {
        let err = run_with("03/10/2025", None, false).unwrap_err();
        assert_eq!(err.to_string(), "invalid --from date: 03/10/2025");
    }
}
