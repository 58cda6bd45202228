//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{api::data, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/api/data", get(data::list).post(data::create))
        .route("/api/data/:id", get(data::get_one).delete(data::delete))
        .with_state(state)
}
