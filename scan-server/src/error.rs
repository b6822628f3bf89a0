//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use fileshield_engine::ScanError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Request rejected before scanning (missing file part, bad multipart)
    ValidationError(String),

    /// The engine refused the input (e.g. empty content)
    ScanRejected(String),

    /// Scoring capability could not produce a result (fail-closed)
    ClassifierUnavailable(String),

    /// Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ScanRejected(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ClassifierUnavailable(msg) => {
                tracing::error!("classifier unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Classifier unavailable")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::EmptyInput => AppError::ScanRejected(err.to_string()),
            ScanError::ClassifierUnavailable(inner) => {
                AppError::ClassifierUnavailable(inner.to_string())
            }
        }
    }
}
