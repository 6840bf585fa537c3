//! Error types for cyclesense-api.
//!
//! Every failure is reported as `{"success": false, "error": ...}`, with a
//! `detail` string when there is more to say.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Result type alias for request handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to API clients.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The advisor has not finished loading. Clients may retry.
    #[error("System still loading. Please try again in a moment.")]
    NotReady,

    /// The analysis pipeline failed; nothing was stored.
    #[error("Analysis failed")]
    AnalysisFailed(#[from] cyclesense_core::Error),

    /// The request body could not be decoded into an observation.
    #[error("Invalid form data")]
    InvalidForm(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::AnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Diagnostic detail, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::NotReady => None,
            ApiError::AnalysisFailed(source) => Some(source.to_string()),
            ApiError::InvalidForm(reason) => Some(reason.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        if let Some(detail) = self.detail() {
            body["detail"] = json!(detail);
        }

        (self.status(), Json(body)).into_response()
    }
}
