//! HTTP mapping for `DemoError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use demohub_core::error::DemoError;

/// `DemoError` rendered as `{"detail": "<message>"}` with the code's status.
#[derive(Debug)]
pub struct ApiError(pub DemoError);

impl From<DemoError> for ApiError {
    fn from(e: DemoError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.client_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}
