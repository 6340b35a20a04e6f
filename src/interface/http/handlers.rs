use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::{SensorLogService, DEFAULT_HISTORY_LIMIT};
use crate::domain::{current_timestamp, LogStats, RawReading, Reading, ValidationError};

/// Client-facing error carrying the offending field and constraint
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SensorLogService>,
    pub started_at: Instant,
}

/// Response for POST /status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub timestamp: String,
    pub data: Reading,
}

/// Response for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub uptime_seconds: f64,
}

/// Response for GET /api/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: LogStats,
    pub current_status: Option<Reading>,
    pub timestamp: String,
}

/// Response for DELETE /api/logs
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub timestamp: String,
}

/// Query params for GET / (dashboard)
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Handler for POST /status
pub async fn update_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<RawReading>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(raw) = payload?;
    let stored = state.service.submit(&raw)?;

    Ok(Json(StatusResponse {
        message: "Status updated successfully".to_string(),
        timestamp: current_timestamp(),
        data: stored,
    }))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.started_at.elapsed().as_secs_f64();

    Json(HealthResponse {
        status: "healthy",
        timestamp: current_timestamp(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: (uptime * 100.0).round() / 100.0,
    })
}

/// Handler for GET /api/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.service.statistics(),
        current_status: state.service.current(),
        timestamp: current_timestamp(),
    })
}

/// Handler for DELETE /api/logs
pub async fn clear_logs_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.service.reset();

    Json(ClearResponse {
        message: "All logs cleared successfully".to_string(),
        timestamp: current_timestamp(),
    })
}
