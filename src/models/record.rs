//! Source dataset types: one record per channel day.

use chrono::{Duration, NaiveDate};
use qtty::Hours;
use serde::{Deserialize, Serialize};

/// Number of days covered by the default reporting range.
pub const DEFAULT_RANGE_DAYS: i64 = 365;

/// One day of channel activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub date: NaiveDate,
    pub views: u64,
    pub watch_hours: Hours,
    pub subscribers_gained: u64,
    pub subscribers_lost: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl ChannelRecord {
    /// Net subscriber movement for the day. Negative when losses exceed gains.
    pub fn net_subscribers(&self) -> i64 {
        self.subscribers_gained as i64 - self.subscribers_lost as i64
    }
}

/// The channel dataset, loaded once at startup and never mutated.
///
/// Records are kept sorted by date. The checksum fingerprints the raw file
/// contents so clients can detect a swapped dataset.
#[derive(Debug, Clone)]
pub struct ChannelDataset {
    records: Vec<ChannelRecord>,
    checksum: String,
}

impl ChannelDataset {
    pub fn new(mut records: Vec<ChannelRecord>, checksum: String) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records, checksum }
    }

    /// An empty dataset, useful as a placeholder in tests.
    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new())
    }

    pub fn records(&self) -> &[ChannelRecord] {
        &self.records
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date of the oldest record, if any.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Date of the newest record, if any.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Default reporting range: the year ending at the newest record.
    pub fn default_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.max_date()
            .map(|max| (max - Duration::days(DEFAULT_RANGE_DAYS), max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_test_record(date: NaiveDate) -> ChannelRecord {
        ChannelRecord {
            date,
            views: 1000,
            watch_hours: Hours::new(42.5),
            subscribers_gained: 12,
            subscribers_lost: 3,
            likes: 80,
            comments: 10,
            shares: 5,
        }
    }

    #[test]
    fn test_net_subscribers() {
        let record = create_test_record(d(2024, 3, 1));
        assert_eq!(record.net_subscribers(), 9);
    }

    #[test]
    fn test_net_subscribers_negative_on_bad_days() {
        let mut record = create_test_record(d(2024, 3, 1));
        record.subscribers_gained = 2;
        record.subscribers_lost = 10;
        assert_eq!(record.net_subscribers(), -8);
    }

    #[test]
    fn test_dataset_sorts_records_by_date() {
        let dataset = ChannelDataset::new(
            vec![
                create_test_record(d(2024, 3, 3)),
                create_test_record(d(2024, 3, 1)),
                create_test_record(d(2024, 3, 2)),
            ],
            "abc123".to_string(),
        );
        let dates: Vec<NaiveDate> = dataset.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2024, 3, 1), d(2024, 3, 2), d(2024, 3, 3)]);
    }

    #[test]
    fn test_dataset_extent() {
        let dataset = ChannelDataset::new(
            vec![
                create_test_record(d(2024, 1, 10)),
                create_test_record(d(2024, 6, 30)),
            ],
            String::new(),
        );
        assert_eq!(dataset.min_date(), Some(d(2024, 1, 10)));
        assert_eq!(dataset.max_date(), Some(d(2024, 6, 30)));
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_default_range_is_one_year_back_from_newest() {
        let dataset = ChannelDataset::new(vec![create_test_record(d(2024, 6, 30))], String::new());
        assert_eq!(dataset.default_range(), Some((d(2023, 7, 1), d(2024, 6, 30))));
    }

    #[test]
    fn test_empty_dataset_has_no_extent() {
        let dataset = ChannelDataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.min_date(), None);
        assert_eq!(dataset.max_date(), None);
        assert_eq!(dataset.default_range(), None);
    }
}
