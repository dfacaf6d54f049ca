//! Data Transfer Objects for the HTTP API.
//!
//! The response DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize; this module adds the request
//! query types and the health response.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Landing
    DatasetInfo,
    // Series
    MetricSeries,
    SeriesPoint,
    // Summary
    AllTimeSummary,
    ChannelReport,
    MetricCard,
    MetricSummary,
    ReportRow,
};

/// Query parameters for the report, summary and series endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Reporting frequency: daily, weekly, monthly or quarterly
    pub frequency: String,
    /// Inclusive range start (`%Y-%m-%d`); defaults to a year before the
    /// newest record
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Inclusive range end (`%Y-%m-%d`); defaults to the newest record
    #[serde(default)]
    pub end: Option<NaiveDate>,
    /// Reference time for completeness (`%Y-%m-%dT%H:%M:%S`); defaults to
    /// the current UTC time. Exposed so reports are reproducible.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Query parameters for the all-time summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllTimeQuery {
    /// Reporting frequency: daily, weekly, monthly or quarterly
    pub frequency: String,
    /// Reference time for completeness (`%Y-%m-%dT%H:%M:%S`); defaults to
    /// the current UTC time
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_query_optional_fields_default_to_none() {
        let query: ReportQuery = serde_json::from_str(r#"{"frequency": "weekly"}"#).unwrap();
        assert_eq!(query.frequency, "weekly");
        assert!(query.start.is_none());
        assert!(query.end.is_none());
        assert!(query.now.is_none());
    }

    #[test]
    fn test_report_query_parses_dates_and_now() {
        let query: ReportQuery = serde_json::from_str(
            r#"{"frequency": "daily", "start": "2024-01-01", "end": "2024-06-30", "now": "2024-07-01T08:30:00"}"#,
        )
        .unwrap();
        assert_eq!(
            query.start,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            query.now,
            Some(
                NaiveDate::from_ymd_opt(2024, 7, 1)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn test_all_time_query_needs_only_a_frequency() {
        let query: AllTimeQuery = serde_json::from_str(r#"{"frequency": "quarterly"}"#).unwrap();
        assert_eq!(query.frequency, "quarterly");
        assert!(query.now.is_none());
    }
}
