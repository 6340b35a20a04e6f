use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use firewatch::adapters::MemoryStore;
use firewatch::application::SensorLogService;
use firewatch::interface::http::create_router;

fn app() -> Router {
    app_with_capacity(100)
}

fn app_with_capacity(max_logs: usize) -> Router {
    let service = Arc::new(SensorLogService::new(Arc::new(MemoryStore::new(max_logs))));
    create_router(service)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
    assert!(body["uptime_seconds"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_post_status_valid_data() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/status",
        json!({"status": "normal", "temperature": 25.5, "gas": 3800}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Status updated successfully");
    assert_eq!(body["data"]["status"], "normal");
    assert_eq!(body["data"]["temperature"], 25.5);
    assert_eq!(body["data"]["gas"], 3800);
    // Timestamp is assigned at acceptance when the client omits it
    assert!(!body["data"]["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_post_status_keeps_client_timestamp() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/status",
        json!({
            "status": "danger",
            "temperature": 45.0,
            "gas": 4500,
            "timestamp": "2025-12-17 16:00:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["timestamp"], "2025-12-17 16:00:00");
}

#[tokio::test]
async fn test_post_status_rounds_temperature() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/status",
        json!({"status": "normal", "temperature": 25.555555, "gas": 3800}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["temperature"], 25.56);
}

#[tokio::test]
async fn test_post_status_invalid_status() {
    let app = app();
    for bad in ["fire", "", "DANGER"] {
        let (status, body) = post_json(
            &app,
            "/status",
            json!({"status": bad, "temperature": 25.0, "gas": 3800}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("status"));
    }
}

#[tokio::test]
async fn test_post_status_temperature_out_of_range() {
    let app = app();
    for temp in [-50.01, 150.01, 200.0] {
        let (status, body) = post_json(
            &app,
            "/status",
            json!({"status": "danger", "temperature": temp, "gas": 3800}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("temperature"));
    }
}

#[tokio::test]
async fn test_post_status_boundary_values_accepted() {
    let app = app();
    for (temp, gas) in [(-50.0, 0), (150.0, 10_000)] {
        let (status, _) = post_json(
            &app,
            "/status",
            json!({"status": "normal", "temperature": temp, "gas": gas}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_post_status_gas_out_of_range() {
    let app = app();
    for gas in [-1, 10_001] {
        let (status, body) = post_json(
            &app,
            "/status",
            json!({"status": "normal", "temperature": 25.0, "gas": gas}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("gas"));
    }
}

#[tokio::test]
async fn test_post_status_missing_field() {
    let app = app();
    let (status, body) = post_json(&app, "/status", json!({"status": "normal"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_post_status_malformed_body() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/status")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_stats_empty() {
    let app = app();
    let (status, body) = get(&app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["danger_count"], 0);
    assert_eq!(body["normal_count"], 0);
    assert_eq!(body["total_logs"], 0);
    assert!(body["current_status"].is_null());
}

#[tokio::test]
async fn test_multiple_status_updates() {
    let app = app();
    for _ in 0..3 {
        post_json(
            &app,
            "/status",
            json!({"status": "normal", "temperature": 22.0, "gas": 3500}),
        )
        .await;
    }
    for _ in 0..2 {
        post_json(
            &app,
            "/status",
            json!({"status": "danger", "temperature": 50.0, "gas": 5000}),
        )
        .await;
    }

    let (status, body) = get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["normal_count"], 3);
    assert_eq!(body["danger_count"], 2);
    assert_eq!(body["total_logs"], 5);
    assert_eq!(body["current_status"]["status"], "danger");
}

#[tokio::test]
async fn test_eviction_over_http() {
    let app = app_with_capacity(5);
    for i in 0..8 {
        post_json(
            &app,
            "/status",
            json!({"status": "normal", "temperature": 20.0 + i as f64, "gas": 3500}),
        )
        .await;
    }

    let (_, body) = get(&app, "/api/stats").await;
    assert_eq!(body["total_logs"], 5);
    // The newest submission is still the current one
    assert_eq!(body["current_status"]["temperature"], 27.0);
}

#[tokio::test]
async fn test_clear_logs() {
    let app = app();
    post_json(
        &app,
        "/status",
        json!({"status": "normal", "temperature": 25.5, "gas": 3800}),
    )
    .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/logs")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("cleared"));

    let (_, stats) = get(&app, "/api/stats").await;
    assert_eq!(stats["total_logs"], 0);
    assert!(stats["current_status"].is_null());
}

#[tokio::test]
async fn test_dashboard_loads() {
    let app = app();
    post_json(
        &app,
        "/status",
        json!({"status": "danger", "temperature": 45.0, "gas": 4500}),
    )
    .await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("Fire Detection"));
    assert!(html.contains("danger"));
    assert!(html.contains("45.00"));
    assert!(html.contains("4500 ppm"));
}

#[tokio::test]
async fn test_dashboard_empty_placeholder() {
    let app = app();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    // Empty log falls back to a normal/0/0 placeholder instead of erroring
    assert!(html.contains("normal"));
    assert!(html.contains("0 ppm"));
}
