//! Service layer for the reporting engine.
//!
//! This module contains the pure computation pipeline: bucketing records
//! into periods, restricting tables to a date range, computing
//! period-over-period changes, classifying bucket completeness, and
//! assembling the dashboard report. Every function here is deterministic;
//! the reference time is a parameter wherever it matters.

pub mod aggregation;

pub mod completeness;

pub mod deltas;

pub mod filtering;

pub mod report;

pub use aggregation::{aggregate, MetricsRow, MetricsTable};
pub use completeness::is_complete;
pub use deltas::{metric_change, metric_total, Metric, MetricChange, UnknownMetric};
pub use filtering::filter_range;
pub use report::{
    all_time_summary, build_report, dataset_info, format_count, format_signed_count,
    format_signed_percent, metric_series, summary_cards,
};
