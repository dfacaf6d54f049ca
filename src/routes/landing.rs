use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dataset summary shown on the landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Number of per-day records in the dataset.
    pub rows: usize,
    /// Date of the oldest record, if the dataset is non-empty.
    pub min_date: Option<NaiveDate>,
    /// Date of the newest record, if the dataset is non-empty.
    pub max_date: Option<NaiveDate>,
    /// Start of the default reporting range.
    pub default_start: Option<NaiveDate>,
    /// End of the default reporting range.
    pub default_end: Option<NaiveDate>,
    /// Fingerprint of the raw dataset file.
    pub checksum: String,
}

pub const GET_DATASET_INFO: &str = "get_dataset_info";

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_dataset_info_clone() {
        let info = DatasetInfo {
            rows: 365,
            min_date: Some(d(2023, 7, 1)),
            max_date: Some(d(2024, 6, 30)),
            default_start: Some(d(2023, 7, 1)),
            default_end: Some(d(2024, 6, 30)),
            checksum: "abc123".to_string(),
        };
        let cloned = info.clone();
        assert_eq!(cloned.rows, 365);
        assert_eq!(cloned.checksum, "abc123");
    }

    #[test]
    fn test_dataset_info_serializes_missing_extent_as_null() {
        let info = DatasetInfo {
            rows: 0,
            min_date: None,
            max_date: None,
            default_start: None,
            default_end: None,
            checksum: String::new(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["min_date"].is_null());
        assert_eq!(json["rows"], 0);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_DATASET_INFO, "get_dataset_info");
    }
}
