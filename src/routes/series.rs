use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Frequency;
use crate::services::deltas::Metric;

/// One point of a single-metric series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Display label of the bucket.
    pub period: String,
    /// First day of the bucket.
    pub start_date: NaiveDate,
    /// Metric value for the bucket as a raw f64.
    pub value: f64,
    /// Whether the bucket lies fully in the past.
    pub complete: bool,
}

/// Per-period values of one metric over a reporting range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: Metric,
    pub frequency: Frequency,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub points: Vec<SeriesPoint>,
}

pub const GET_METRIC_SERIES: &str = "get_metric_series";
