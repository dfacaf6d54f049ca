//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual computation. The handlers are where the
//! injected reference time falls back to the real clock.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDateTime, Utc};

use super::dto::{AllTimeQuery, HealthResponse, ReportQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AllTimeSummary, ChannelReport, DatasetInfo, MetricSeries, MetricSummary};
use crate::models::Frequency;
use crate::services::deltas::Metric;
use crate::services::report;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn resolve_now(requested: Option<NaiveDateTime>) -> NaiveDateTime {
    requested.unwrap_or_else(|| Utc::now().naive_utc())
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Dataset
// =============================================================================

/// GET /v1/dataset
///
/// Summary of the loaded dataset: row count, date extent, default
/// reporting range and file fingerprint.
pub async fn get_dataset_info(State(state): State<AppState>) -> HandlerResult<DatasetInfo> {
    Ok(Json(report::dataset_info(&state.dataset)))
}

// =============================================================================
// Reporting Endpoints
// =============================================================================

/// GET /v1/report
///
/// Full channel report at the requested frequency: aggregated rows with
/// completeness flags plus the headline cards.
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> HandlerResult<ChannelReport> {
    let frequency: Frequency = query.frequency.parse()?;
    let now = resolve_now(query.now);

    Ok(Json(report::build_report(
        &state.dataset,
        frequency,
        query.start,
        query.end,
        now,
    )))
}

/// GET /v1/summary
///
/// Just the headline cards for the requested range.
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> HandlerResult<MetricSummary> {
    let frequency: Frequency = query.frequency.parse()?;
    let now = resolve_now(query.now);

    Ok(Json(report::summary_cards(
        &state.dataset,
        frequency,
        query.start,
        query.end,
        now,
    )))
}

/// GET /v1/alltime
///
/// All-time totals with the latest period-over-period change at the
/// requested frequency.
pub async fn get_all_time_summary(
    State(state): State<AppState>,
    Query(query): Query<AllTimeQuery>,
) -> HandlerResult<AllTimeSummary> {
    let frequency: Frequency = query.frequency.parse()?;
    let now = resolve_now(query.now);

    Ok(Json(report::all_time_summary(&state.dataset, frequency, now)))
}

/// GET /v1/series/{metric}
///
/// Per-period values of a single metric, suitable for charting.
pub async fn get_metric_series(
    State(state): State<AppState>,
    Path(metric): Path<String>,
    Query(query): Query<ReportQuery>,
) -> HandlerResult<MetricSeries> {
    let metric: Metric = metric.parse()?;
    let frequency: Frequency = query.frequency.parse()?;
    let now = resolve_now(query.now);

    Ok(Json(report::metric_series(
        &state.dataset,
        metric,
        frequency,
        query.start,
        query.end,
        now,
    )))
}
