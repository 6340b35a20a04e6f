use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::application::SensorLogService;

use super::dashboard::dashboard_handler;
use super::handlers::{
    clear_logs_handler, health_handler, stats_handler, update_status_handler, AppState,
};

pub fn create_router(service: Arc<SensorLogService>) -> Router {
    let state = AppState {
        service,
        started_at: Instant::now(),
    };

    Router::new()
        .route("/", get(dashboard_handler))
        .route("/status", post(update_status_handler))
        .route("/health", get(health_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/logs", delete(clear_logs_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
