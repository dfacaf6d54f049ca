//! Reporting frequencies, bucket identities and the creator calendar.
//!
//! The channel reports on a custom calendar whose year starts in February.
//! `creator_quarter` is the single source of truth for that mapping; every
//! call site that needs quarter math resolves dates through it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reporting frequency for aggregation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    /// Wire name of the frequency (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized frequency name.
///
/// This is the one place the engine fails fast instead of falling back:
/// a report at an unknown frequency is a caller bug, not missing data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized frequency '{0}', expected one of: daily, weekly, monthly, quarterly")]
pub struct UnknownFrequency(pub String);

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            _ => Err(UnknownFrequency(s.to_string())),
        }
    }
}

/// Map a calendar date to its creator-calendar `(year, quarter)`.
///
/// The reporting year starts in February: months 2-4 are Q1, 5-7 are Q2,
/// 8-10 are Q3 and 11-12 are Q4. January belongs to Q4 of the previous
/// year, closing the quarter that opened the preceding November.
pub fn creator_quarter(date: NaiveDate) -> (i32, u32) {
    match date.month() {
        1 => (date.year() - 1, 4),
        2..=4 => (date.year(), 1),
        5..=7 => (date.year(), 2),
        8..=10 => (date.year(), 3),
        _ => (date.year(), 4),
    }
}

/// First day of a creator-calendar quarter (quarter must be in 1..=4).
pub fn quarter_start(year: i32, quarter: u32) -> NaiveDate {
    let month = match quarter {
        1 => 2,
        2 => 5,
        3 => 8,
        _ => 11,
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// First day of a calendar month.
pub(crate) fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// The `(year, month)` pair following the given calendar month.
pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Identity of one aggregation bucket.
///
/// Each variant corresponds to a [`Frequency`]; a table never mixes
/// variants, so the derived ordering (which sorts by variant first) is
/// chronological everywhere it is observed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// A single calendar day.
    Day(NaiveDate),
    /// An ISO week, identified by its Monday.
    Week { start: NaiveDate },
    /// A calendar month.
    Month { year: i32, month: u32 },
    /// A creator-calendar quarter.
    Quarter { year: i32, quarter: u32 },
}

impl ReportPeriod {
    /// Resolve a date into the bucket containing it at the given frequency.
    pub fn from_date(date: NaiveDate, frequency: Frequency) -> Self {
        match frequency {
            Frequency::Daily => ReportPeriod::Day(date),
            Frequency::Weekly => ReportPeriod::Week {
                start: week_start(date),
            },
            Frequency::Monthly => ReportPeriod::Month {
                year: date.year(),
                month: date.month(),
            },
            Frequency::Quarterly => {
                let (year, quarter) = creator_quarter(date);
                ReportPeriod::Quarter { year, quarter }
            }
        }
    }

    /// The frequency this bucket belongs to.
    pub fn frequency(&self) -> Frequency {
        match self {
            ReportPeriod::Day(_) => Frequency::Daily,
            ReportPeriod::Week { .. } => Frequency::Weekly,
            ReportPeriod::Month { .. } => Frequency::Monthly,
            ReportPeriod::Quarter { .. } => Frequency::Quarterly,
        }
    }

    /// Canonical timestamp of the bucket: its first day.
    pub fn start_date(&self) -> NaiveDate {
        match *self {
            ReportPeriod::Day(date) => date,
            ReportPeriod::Week { start } => start,
            ReportPeriod::Month { year, month } => month_start(year, month),
            ReportPeriod::Quarter { year, quarter } => quarter_start(year, quarter),
        }
    }

    /// Stable display label: `2024-03-17`, `2024-W12`, `2024-03`, `2024-Q2`.
    ///
    /// Week labels use the ISO week year, which differs from the calendar
    /// year of the Monday around new year.
    pub fn label(&self) -> String {
        match *self {
            ReportPeriod::Day(date) => date.format("%Y-%m-%d").to_string(),
            ReportPeriod::Week { start } => {
                let iso = start.iso_week();
                format!("{}-W{:02}", iso.year(), iso.week())
            }
            ReportPeriod::Month { year, month } => format!("{:04}-{:02}", year, month),
            ReportPeriod::Quarter { year, quarter } => format!("{}-Q{}", year, quarter),
        }
    }
}

