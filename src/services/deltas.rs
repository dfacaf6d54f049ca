//! Period-over-period metric changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::aggregation::{MetricsRow, MetricsTable};

/// A metric that can be totalled and compared across periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Views,
    WatchHours,
    NetSubscribers,
    Likes,
    Comments,
    Shares,
    SubscribersGained,
    SubscribersLost,
}

impl Metric {
    /// Wire name of the metric (snake_case).
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Views => "views",
            Metric::WatchHours => "watch_hours",
            Metric::NetSubscribers => "net_subscribers",
            Metric::Likes => "likes",
            Metric::Comments => "comments",
            Metric::Shares => "shares",
            Metric::SubscribersGained => "subscribers_gained",
            Metric::SubscribersLost => "subscribers_lost",
        }
    }

    /// Pull this metric's value out of a row as a raw f64.
    pub fn extract(&self, row: &MetricsRow) -> f64 {
        match self {
            Metric::Views => row.views as f64,
            Metric::WatchHours => row.watch_hours.value(),
            Metric::NetSubscribers => row.net_subscribers as f64,
            Metric::Likes => row.likes as f64,
            Metric::Comments => row.comments as f64,
            Metric::Shares => row.shares as f64,
            Metric::SubscribersGained => row.subscribers_gained as f64,
            Metric::SubscribersLost => row.subscribers_lost as f64,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized metric name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized metric '{0}'")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "views" => Ok(Metric::Views),
            "watch_hours" => Ok(Metric::WatchHours),
            "net_subscribers" => Ok(Metric::NetSubscribers),
            "likes" => Ok(Metric::Likes),
            "comments" => Ok(Metric::Comments),
            "shares" => Ok(Metric::Shares),
            "subscribers_gained" => Ok(Metric::SubscribersGained),
            "subscribers_lost" => Ok(Metric::SubscribersLost),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

/// Change between the last two periods of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    /// Signed absolute change, last minus previous.
    pub absolute: f64,
    /// Relative change in percent. Zero when the previous value was zero.
    pub percent: f64,
}

impl MetricChange {
    pub const ZERO: MetricChange = MetricChange {
        absolute: 0.0,
        percent: 0.0,
    };
}

/// Compute the change of `metric` between the last two rows of a table.
///
/// Tables with fewer than two rows yield a zero change, and a previous
/// value of zero floors the percentage to zero. The result is never NaN
/// or infinite.
pub fn metric_change(table: &MetricsTable, metric: Metric) -> MetricChange {
    let (previous, last) = match table.last_two() {
        Some(pair) => pair,
        None => return MetricChange::ZERO,
    };

    let previous = metric.extract(previous);
    let last = metric.extract(last);

    let absolute = last - previous;
    let percent = if previous != 0.0 {
        absolute / previous * 100.0
    } else {
        0.0
    };

    MetricChange { absolute, percent }
}

/// Total of `metric` over every row of the table.
pub fn metric_total(table: &MetricsTable, metric: Metric) -> f64 {
    table.rows.iter().map(|row| metric.extract(row)).sum()
}
