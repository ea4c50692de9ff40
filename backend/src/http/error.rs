//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::session::LoadFailure;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The session never loaded its table
    LoadFailed(LoadFailure),
    /// Invalid request (validation error)
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::LoadFailed(failure) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("LOAD_FAILED", "Order data could not be loaded")
                    .with_details(format!("{}: {}", failure.kind, failure.message)),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<&LoadFailure> for AppError {
    fn from(failure: &LoadFailure) -> Self {
        AppError::LoadFailed(failure.clone())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_is_503() {
        let err = AppError::LoadFailed(LoadFailure {
            kind: "connection".to_string(),
            message: "refused".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_bad_request_is_400() {
        let err = AppError::BadRequest("end before start".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_omits_empty_details() {
        let json = serde_json::to_value(ApiError::new("X", "y")).unwrap();
        assert!(json.get("details").is_none());
    }
}
