//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};

use crate::models::FallbackResponse;

pub type AppResult<T> = Result<T, AppError>;

/// Failures while producing a prediction.
///
/// Every variant is answered with the same fallback body; the detail only
/// reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Network/transport failure or non-success upstream status
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Upstream returned zero records
    #[error("no history data available")]
    DataUnavailable,

    /// Record missing fields, unknown outcome label or undecodable body
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Prediction failed, serving fallback");

        (StatusCode::INTERNAL_SERVER_ERROR, Json(FallbackResponse::default())).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::MalformedRecord(err.to_string())
        } else {
            AppError::UpstreamUnreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedRecord(err.to_string())
    }
}
