//! Static service endpoints.
//!
//! - `/`        : banner
//! - `/health`  : liveness with current time
//! - `/metrics` : fixed Prometheus text block

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use demohub_core::model::now_iso8601;
use demohub_core::obs::CONTENT_TYPE;

/// Canned exposition. Not derived from traffic.
pub const STATIC_METRICS: &str = "\
# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total{method=\"GET\",endpoint=\"/\"} 100
http_requests_total{method=\"GET\",endpoint=\"/api/data\"} 75
http_requests_total{method=\"POST\",endpoint=\"/api/data\"} 50
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds gauge
http_request_duration_seconds 0.05
# HELP app_up Whether the application is up
# TYPE app_up gauge
app_up 1
";

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Data API is running", "status": "running" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "timestamp": now_iso8601() }))
}

pub async fn metrics() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], STATIC_METRICS)
}
