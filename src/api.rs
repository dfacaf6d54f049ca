//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::landing::DatasetInfo;
pub use crate::routes::series::MetricSeries;
pub use crate::routes::series::SeriesPoint;
pub use crate::routes::summary::AllTimeSummary;
pub use crate::routes::summary::ChannelReport;
pub use crate::routes::summary::MetricCard;
pub use crate::routes::summary::MetricSummary;
pub use crate::routes::summary::ReportRow;

pub use crate::models::calendar::{Frequency, ReportPeriod, UnknownFrequency};
pub use crate::models::record::{ChannelDataset, ChannelRecord};
pub use crate::services::aggregation::{MetricsRow, MetricsTable};
pub use crate::services::deltas::{Metric, MetricChange, UnknownMetric};
