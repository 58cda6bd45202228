//! Greeter HTTP endpoints.
//!
//! - `/`        : greeting (counted)
//! - `/metrics` : process families and the greeting counter, Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use demohub_core::obs::CONTENT_TYPE;

use crate::app_state::AppState;

pub const GREETING: &str = "Hello Rupesh!";

pub async fn greet(State(state): State<AppState>) -> Json<Value> {
    state.requests().inc();
    tracing::debug!(total = state.requests().get(), "greeting served");
    Json(json!({ "message": GREETING }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let mut body = String::new();
    state.process().render(&mut body);
    state.requests().render(&mut body);

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}
