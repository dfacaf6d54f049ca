//! Report assembly: the full pipeline from raw records to dashboard data.
//!
//! Everything here is pure. The reference time `now` is a parameter on
//! every entry point; resolving a real clock is the HTTP shell's job.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{ChannelDataset, Frequency};
use crate::routes::landing::DatasetInfo;
use crate::routes::series::{MetricSeries, SeriesPoint};
use crate::routes::summary::{AllTimeSummary, ChannelReport, MetricCard, MetricSummary, ReportRow};
use crate::services::aggregation::{aggregate, MetricsRow, MetricsTable};
use crate::services::completeness::is_complete;
use crate::services::deltas::{metric_change, metric_total, Metric};
use crate::services::filtering::filter_range;

/// Headline cards shown on the dashboard, in display order.
const SUMMARY_CARDS: [(&str, Metric, &str); 4] = [
    ("Total Subscribers", Metric::NetSubscribers, "#028283"),
    ("Total Views", Metric::Views, "#df336b"),
    ("Total Watch Hours", Metric::WatchHours, "#e7541e"),
    ("Total Likes", Metric::Likes, "#e0b15f"),
];

/// Build the full report: aggregated rows with completeness flags plus
/// the headline cards.
///
/// Missing range endpoints default to the year ending at the newest
/// record; for an empty dataset the range collapses to `now`'s date and
/// the report comes back empty but well formed.
pub fn build_report(
    dataset: &ChannelDataset,
    frequency: Frequency,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    now: NaiveDateTime,
) -> ChannelReport {
    let (start, end) = resolve_range(dataset, start, end, now);
    let table = filtered_table(dataset, frequency, start, end);

    let rows = table.rows.iter().map(|row| report_row(row, now)).collect();
    let cards = build_cards(&table);

    ChannelReport {
        frequency,
        start,
        end,
        rows,
        cards,
    }
}

/// Build just the headline cards over a reporting range.
pub fn summary_cards(
    dataset: &ChannelDataset,
    frequency: Frequency,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    now: NaiveDateTime,
) -> MetricSummary {
    let (start, end) = resolve_range(dataset, start, end, now);
    let table = filtered_table(dataset, frequency, start, end);

    MetricSummary {
        frequency,
        start,
        end,
        cards: build_cards(&table),
    }
}

/// Build the all-time headline cards: totals over the entire dataset,
/// deltas between the last two buckets of the unfiltered table.
///
/// The newest bucket's label and completeness ride along so the shell
/// can caption a still-accumulating period; both are `None` when the
/// dataset is empty.
pub fn all_time_summary(
    dataset: &ChannelDataset,
    frequency: Frequency,
    now: NaiveDateTime,
) -> AllTimeSummary {
    let table = aggregate(dataset.records(), frequency);
    let last = table.rows.last().map(|row| row.period);

    AllTimeSummary {
        frequency,
        cards: build_cards(&table),
        last_period: last.map(|period| period.label()),
        last_period_complete: last.map(|period| is_complete(period, now)),
    }
}

/// Build the per-period series of a single metric.
pub fn metric_series(
    dataset: &ChannelDataset,
    metric: Metric,
    frequency: Frequency,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    now: NaiveDateTime,
) -> MetricSeries {
    let (start, end) = resolve_range(dataset, start, end, now);
    let table = filtered_table(dataset, frequency, start, end);

    let points = table
        .rows
        .iter()
        .map(|row| SeriesPoint {
            period: row.period.label(),
            start_date: row.period.start_date(),
            value: metric.extract(row),
            complete: is_complete(row.period, now),
        })
        .collect();

    MetricSeries {
        metric,
        frequency,
        start,
        end,
        points,
    }
}

/// Summarize the loaded dataset for the landing view.
pub fn dataset_info(dataset: &ChannelDataset) -> DatasetInfo {
    let default = dataset.default_range();

    DatasetInfo {
        rows: dataset.len(),
        min_date: dataset.min_date(),
        max_date: dataset.max_date(),
        default_start: default.map(|(start, _)| start),
        default_end: default.map(|(_, end)| end),
        checksum: dataset.checksum().to_string(),
    }
}

fn resolve_range(
    dataset: &ChannelDataset,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    now: NaiveDateTime,
) -> (NaiveDate, NaiveDate) {
    let default = dataset.default_range();
    let start = start
        .or(default.map(|(start, _)| start))
        .unwrap_or_else(|| now.date());
    let end = end
        .or(default.map(|(_, end)| end))
        .unwrap_or_else(|| now.date());
    (start, end)
}

fn filtered_table(
    dataset: &ChannelDataset,
    frequency: Frequency,
    start: NaiveDate,
    end: NaiveDate,
) -> MetricsTable {
    filter_range(&aggregate(dataset.records(), frequency), start, end)
}

fn report_row(row: &MetricsRow, now: NaiveDateTime) -> ReportRow {
    ReportRow {
        period: row.period.label(),
        start_date: row.period.start_date(),
        complete: is_complete(row.period, now),
        views: row.views,
        watch_hours: row.watch_hours,
        subscribers_gained: row.subscribers_gained,
        subscribers_lost: row.subscribers_lost,
        net_subscribers: row.net_subscribers,
        likes: row.likes,
        comments: row.comments,
        shares: row.shares,
    }
}

fn build_cards(table: &MetricsTable) -> Vec<MetricCard> {
    SUMMARY_CARDS
        .iter()
        .map(|&(title, metric, color)| {
            let total = metric_total(table, metric);
            let change = metric_change(table, metric);
            MetricCard {
                title: title.to_string(),
                metric,
                color: color.to_string(),
                total,
                total_display: format_count(total),
                change,
                change_display: format_signed_count(change.absolute),
                percent_display: format_signed_percent(change.percent),
            }
        })
        .collect()
}

/// Format a count with thousands separators and no decimals.
///
/// The value is rounded to the nearest whole number first, so watch-hour
/// totals display the same way as integer counts.
pub fn format_count(value: f64) -> String {
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && rounded > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a count with an explicit leading sign, e.g. `+1,234`.
pub fn format_signed_count(value: f64) -> String {
    let formatted = format_count(value);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

/// Format a percentage with an explicit sign and two decimals, e.g. `+12.34%`.
pub fn format_signed_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}
