use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::tailoring::extractor::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every server-side failure shares the `Error processing resume:` wrapper;
/// corrupt PDFs are typed separately only for logging.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid multipart form: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    Extraction(#[from] ExtractError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // 400 for malformed bodies, 413 when the upload exceeds the body limit
            AppError::Multipart(e) => (e.status(), self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Extraction(e) => {
                tracing::error!("PDF extraction error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error processing resume: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error processing resume: {e}"),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
