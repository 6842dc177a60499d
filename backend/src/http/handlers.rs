//! HTTP handlers for the REST API.
//!
//! Each handler validates its path parameters against the configured limits
//! and delegates to the service layer. Trajectory computation is CPU-bound,
//! so it runs on the blocking pool.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::info;

use super::dto::{HealthResponse, NumberAnalysis, RangeData, SixNRange, VisualizationData};
use super::error::AppError;
use super::state::AppState;
use crate::error::CollatzResult;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run a core computation on the blocking pool.
async fn compute<T, F>(f: F) -> HandlerResult<T>
where
    F: FnOnce() -> CollatzResult<T> + Send + 'static,
    T: Send + 'static,
{
    let data = tokio::task::spawn_blocking(f).await??;
    Ok(Json(data))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Analysis Endpoints
// =============================================================================

/// GET /collatz/{number}
///
/// Full trajectory and statistics for one number.
pub async fn get_collatz_number(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> HandlerResult<NumberAnalysis> {
    let Path(number) = path?;
    let number = state.check_number(number)?;
    info!(number, "collatz number requested");

    compute(move || services::analyze_number(number)).await
}

/// GET /collatz/range/{start}/{end}
///
/// Per-number details and per-metric winners for a range.
pub async fn get_collatz_range(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> HandlerResult<RangeData> {
    let Path((start, end)) = path?;
    let range = state.check_range(start, end)?;
    info!(start, end, "collatz range requested");

    compute(move || services::analyze_range(range.start(), range.end())).await
}

/// GET /collatz/sixn/{start}/{end}
///
/// Statistics restricted to numbers congruent to 1 or 5 modulo 6.
pub async fn get_sixn_analysis(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> HandlerResult<SixNRange> {
    let Path((start, end)) = path?;
    let range = state.check_range(start, end)?;
    info!(start, end, "6n±1 analysis requested");

    compute(move || services::analyze_six_n(range.start(), range.end())).await
}

/// GET /collatz/visualization/{start}/{end}
///
/// Leading odd run of every odd number in a range.
pub async fn get_visualization_data(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> HandlerResult<VisualizationData> {
    let Path((start, end)) = path?;
    let range = state.check_range(start, end)?;
    info!(start, end, "visualization requested");

    compute(move || services::build_visualization(range.start(), range.end())).await
}
