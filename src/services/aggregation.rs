//! Bucketing of channel records into per-period metric sums.

use std::collections::BTreeMap;

use qtty::Hours;
use serde::{Deserialize, Serialize};

use crate::models::{ChannelRecord, Frequency, ReportPeriod};

/// One aggregation bucket: a period and the metric sums inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub period: ReportPeriod,
    pub views: u64,
    pub watch_hours: Hours,
    pub subscribers_gained: u64,
    pub subscribers_lost: u64,
    pub net_subscribers: i64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl MetricsRow {
    /// A zeroed row for the given period.
    pub fn empty(period: ReportPeriod) -> Self {
        Self {
            period,
            views: 0,
            watch_hours: Hours::new(0.0),
            subscribers_gained: 0,
            subscribers_lost: 0,
            net_subscribers: 0,
            likes: 0,
            comments: 0,
            shares: 0,
        }
    }

    fn add_record(&mut self, record: &ChannelRecord) {
        self.views += record.views;
        // Work with raw f64 values, then wrap as Hours
        self.watch_hours = Hours::new(self.watch_hours.value() + record.watch_hours.value());
        self.subscribers_gained += record.subscribers_gained;
        self.subscribers_lost += record.subscribers_lost;
        self.net_subscribers += record.net_subscribers();
        self.likes += record.likes;
        self.comments += record.comments;
        self.shares += record.shares;
    }
}

/// An ordered table of aggregation buckets at a single frequency.
///
/// Rows are sorted ascending by period. An empty table is valid and flows
/// through every downstream operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsTable {
    pub frequency: Frequency,
    pub rows: Vec<MetricsRow>,
}

impl MetricsTable {
    /// An empty table at the given frequency.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The last two rows in period order, when the table has at least two.
    pub(crate) fn last_two(&self) -> Option<(&MetricsRow, &MetricsRow)> {
        match self.rows.as_slice() {
            [.., previous, last] => Some((previous, last)),
            _ => None,
        }
    }
}

/// Bucket records by frequency and sum every metric within each bucket.
///
/// Records landing in the same bucket are summed, including duplicate
/// dates. Output rows come back sorted ascending by period.
pub fn aggregate(records: &[ChannelRecord], frequency: Frequency) -> MetricsTable {
    let mut buckets: BTreeMap<ReportPeriod, MetricsRow> = BTreeMap::new();

    for record in records {
        let period = ReportPeriod::from_date(record.date, frequency);
        buckets
            .entry(period)
            .or_insert_with(|| MetricsRow::empty(period))
            .add_record(record);
    }

    MetricsTable {
        frequency,
        rows: buckets.into_values().collect(),
    }
}
