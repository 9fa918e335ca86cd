//! Attendance statuses and per-day status resolution.
//!
//! A calendar date may carry several attendance records. Resolution reduces
//! the statuses present to one value for display, using a fixed priority
//! order kept as an ordered list of rules.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::format_duration;

/// Attendance status of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceStatus {
    Work,
    Sickness,
    Reserves,
    DayOff,
    HalfDayOff,
}

impl AttendanceStatus {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Sickness => "sickness",
            Self::Reserves => "reserves",
            Self::DayOff => "dayOff",
            Self::HalfDayOff => "halfDayOff",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "sickness" => Ok(Self::Sickness),
            "reserves" => Ok(Self::Reserves),
            "dayOff" => Ok(Self::DayOff),
            "halfDayOff" => Ok(Self::HalfDayOff),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Error type for unknown attendance status strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attendance status: {0}")]
pub struct UnknownStatus(pub String);

/// The single status shown for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolvedStatus {
    DayOff,
    Sickness,
    Reserves,
    /// Sickness or reserves reported without a supporting document.
    #[serde(rename_all = "camelCase")]
    MissingDocument { status: AttendanceStatus },
    /// Half a day off with work reported for the remaining hours.
    #[serde(rename_all = "camelCase")]
    HalfDayOffWithWork { work_minutes: i64 },
    HalfDayOff,
    Work,
    /// Only unrecognized values were present; carries the first one seen.
    #[serde(rename_all = "camelCase")]
    Unrecognized { value: String },
}

impl ResolvedStatus {
    /// Short human-readable label.
    pub fn label(&self) -> String {
        match self {
            Self::DayOff => "day off".to_string(),
            Self::Sickness => "sickness".to_string(),
            Self::Reserves => "reserves".to_string(),
            Self::MissingDocument { status } => format!("missing document ({status})"),
            Self::HalfDayOffWithWork { work_minutes } => {
                format!("half day off + work {}", format_duration(*work_minutes))
            }
            Self::HalfDayOff => "half day off".to_string(),
            Self::Work => "work".to_string(),
            Self::Unrecognized { value } => format!("unrecognized ({value})"),
        }
    }
}

impl fmt::Display for ResolvedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Side inputs for resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveContext {
    /// Whether the sickness/reserves record carries a supporting document.
    pub has_document: bool,
    /// Aggregated work minutes for the day.
    pub work_minutes: i64,
}

type StatusSet = HashSet<AttendanceStatus>;

/// One priority rule: when `applies`, the day resolves to `outcome`.
struct Rule {
    applies: fn(&StatusSet) -> bool,
    outcome: fn(&ResolveContext) -> ResolvedStatus,
}

fn documented(
    status: AttendanceStatus,
    resolved: ResolvedStatus,
    ctx: &ResolveContext,
) -> ResolvedStatus {
    if ctx.has_document {
        resolved
    } else {
        ResolvedStatus::MissingDocument { status }
    }
}

/// Highest priority first.
const RULES: &[Rule] = &[
    Rule {
        applies: |set| set.contains(&AttendanceStatus::DayOff),
        outcome: |_| ResolvedStatus::DayOff,
    },
    Rule {
        applies: |set| set.contains(&AttendanceStatus::Sickness),
        outcome: |ctx| documented(AttendanceStatus::Sickness, ResolvedStatus::Sickness, ctx),
    },
    Rule {
        applies: |set| set.contains(&AttendanceStatus::Reserves),
        outcome: |ctx| documented(AttendanceStatus::Reserves, ResolvedStatus::Reserves, ctx),
    },
    Rule {
        applies: |set| {
            set.contains(&AttendanceStatus::HalfDayOff) && set.contains(&AttendanceStatus::Work)
        },
        outcome: |ctx| ResolvedStatus::HalfDayOffWithWork {
            work_minutes: ctx.work_minutes,
        },
    },
    Rule {
        applies: |set| set.contains(&AttendanceStatus::HalfDayOff),
        outcome: |_| ResolvedStatus::HalfDayOff,
    },
    Rule {
        applies: |set| set.contains(&AttendanceStatus::Work),
        outcome: |_| ResolvedStatus::Work,
    },
];

/// Resolves the statuses present on one date to a single status.
///
/// Input order does not matter. Returns `None` for an empty input; days
/// without records are classified before resolution runs.
pub fn resolve_status(
    statuses: &[AttendanceStatus],
    ctx: &ResolveContext,
) -> Option<ResolvedStatus> {
    let set: StatusSet = statuses.iter().copied().collect();
    RULES
        .iter()
        .find(|rule| (rule.applies)(&set))
        .map(|rule| (rule.outcome)(ctx))
}

/// Resolves raw status strings as stored.
///
/// Unrecognized values are skipped. If nothing recognizable remains, the day
/// resolves to [`ResolvedStatus::Unrecognized`] with the first value seen.
pub fn resolve_raw_statuses<S: AsRef<str>>(
    values: &[S],
    ctx: &ResolveContext,
) -> Option<ResolvedStatus> {
    let mut known = Vec::with_capacity(values.len());
    let mut first_unknown: Option<&str> = None;
    for value in values {
        let value = value.as_ref();
        match value.parse::<AttendanceStatus>() {
            Ok(status) => known.push(status),
            Err(err) => {
                tracing::warn!(%err, "ignoring attendance status");
                first_unknown.get_or_insert(value);
            }
        }
    }

    resolve_status(&known, ctx).or_else(|| {
        first_unknown.map(|value| ResolvedStatus::Unrecognized {
            value: value.to_string(),
        })
    })
}
