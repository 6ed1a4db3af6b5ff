use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error surfaced to clients as a small JSON body plus an HTTP status.
/// The CRUD endpoints keep their status-only contract for 404/204/400; this
/// type is for the failures that deserve a payload (internal errors).
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.title,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}
