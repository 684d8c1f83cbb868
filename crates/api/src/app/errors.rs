use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_products::RepositoryError;

pub const INVALID_PARAMETER: &str = "Invalid parameter";
pub const INVALID_CATEGORY: &str = "Invalid category parameter";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const PROCESSING_FAILED: &str = "Error processing request";

/// Store failures of every kind surface as 500; the kind only shows up in the
/// `error` code and the log line.
pub fn repository_error_to_response(err: RepositoryError) -> axum::response::Response {
    tracing::error!(error = %err, code = err.code(), "store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, err.code(), PROCESSING_FAILED)
}

pub fn invalid_payload(reason: impl std::fmt::Display) -> axum::response::Response {
    tracing::debug!(%reason, "rejecting request body");
    json_error(StatusCode::BAD_REQUEST, "invalid_payload", INVALID_PAYLOAD)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
