use axum::{Json, http::StatusCode, response::Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Uniform error body for every router. Internal detail stays in the logs;
/// the client only sees the status and a short message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    use axum::response::IntoResponse;

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        message.into()
    };

    (
        status,
        Json(ErrorResponse {
            code: status.as_u16(),
            message,
        }),
    )
        .into_response()
}
