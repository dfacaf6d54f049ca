use chrono::NaiveDate;
use qtty::Hours;
use serde::{Deserialize, Serialize};

use crate::models::Frequency;
use crate::services::deltas::{Metric, MetricChange};

/// One reporting bucket with its completeness flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Display label of the bucket, e.g. `2024-W12` or `2024-Q2`.
    pub period: String,
    /// First day of the bucket.
    pub start_date: NaiveDate,
    /// Whether the bucket lies fully in the past.
    pub complete: bool,
    pub views: u64,
    pub watch_hours: Hours,
    pub subscribers_gained: u64,
    pub subscribers_lost: u64,
    pub net_subscribers: i64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Headline card for one metric over the reporting range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    /// Display title, e.g. "Total Views".
    pub title: String,
    pub metric: Metric,
    /// Hex color used verbatim by the frontend.
    pub color: String,
    /// Total over the filtered rows.
    pub total: f64,
    /// Total formatted with thousands separators.
    pub total_display: String,
    /// Change between the last two periods.
    pub change: MetricChange,
    /// Absolute change with an explicit sign, e.g. `+1,234`.
    pub change_display: String,
    /// Percentage change with an explicit sign, e.g. `+12.34%`.
    pub percent_display: String,
}

/// The headline cards over a reporting range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSummary {
    pub frequency: Frequency,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cards: Vec<MetricCard>,
}

/// All-time totals with the latest bucket's period-over-period change.
///
/// Totals span the entire dataset; deltas are computed on the unfiltered
/// table at `frequency`, so they reflect the newest movement at the
/// active resolution. `last_period`/`last_period_complete` drive the
/// "last period is incomplete" caption and are absent for an empty
/// dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllTimeSummary {
    pub frequency: Frequency,
    pub cards: Vec<MetricCard>,
    /// Label of the newest bucket, if any records exist.
    pub last_period: Option<String>,
    /// Whether the newest bucket lies fully in the past.
    pub last_period_complete: Option<bool>,
}

/// Full channel report: reporting rows plus headline cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelReport {
    pub frequency: Frequency,
    /// Effective start of the range after defaulting.
    pub start: NaiveDate,
    /// Effective end of the range after defaulting.
    pub end: NaiveDate,
    pub rows: Vec<ReportRow>,
    pub cards: Vec<MetricCard>,
}

pub const GET_REPORT: &str = "get_report";
pub const GET_SUMMARY_CARDS: &str = "get_summary_cards";
pub const GET_ALL_TIME_SUMMARY: &str = "get_all_time_summary";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_row_clone() {
        let row = ReportRow {
            period: "2024-W12".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            complete: true,
            views: 1000,
            watch_hours: Hours::new(42.0),
            subscribers_gained: 10,
            subscribers_lost: 2,
            net_subscribers: 8,
            likes: 50,
            comments: 9,
            shares: 4,
        };
        let cloned = row.clone();
        assert_eq!(cloned.period, "2024-W12");
        assert_eq!(cloned.watch_hours.value(), 42.0);
        assert!(cloned.complete);
    }

    #[test]
    fn test_metric_card_debug() {
        let card = MetricCard {
            title: "Total Views".to_string(),
            metric: Metric::Views,
            color: "#df336b".to_string(),
            total: 12345.0,
            total_display: "12,345".to_string(),
            change: MetricChange::ZERO,
            change_display: "+0".to_string(),
            percent_display: "+0.00%".to_string(),
        };
        let debug_str = format!("{:?}", card);
        assert!(debug_str.contains("MetricCard"));
        assert!(debug_str.contains("Total Views"));
    }

    #[test]
    fn test_all_time_summary_serializes_missing_last_period_as_null() {
        let summary = AllTimeSummary {
            frequency: Frequency::Weekly,
            cards: vec![],
            last_period: None,
            last_period_complete: None,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["frequency"], "weekly");
        assert!(json["last_period"].is_null());
        assert!(json["last_period_complete"].is_null());
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_REPORT, "get_report");
        assert_eq!(GET_SUMMARY_CARDS, "get_summary_cards");
        assert_eq!(GET_ALL_TIME_SUMMARY, "get_all_time_summary");
    }
}
