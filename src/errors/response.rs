use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::codes::ErrorCode;
use crate::display::{RequestSummaryError, TranslationError};

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing
    pub request_id: String,
    /// Additional context (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(code, message.into(), None)
    }

    /// Create error with additional details
    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self::build(code, message.into(), Some(details))
    }

    fn build(code: ErrorCode, message: String, details: Option<Value>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code,
                message,
                request_id: Uuid::new_v4().to_string(),
                details,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.code.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<RequestSummaryError> for ErrorResponse {
    fn from(err: RequestSummaryError) -> Self {
        match &err {
            RequestSummaryError::MissingConfig => {
                Self::new(ErrorCode::MissingRequestConfig, err.to_string())
            }
            RequestSummaryError::InvalidJson { field, .. } => Self::with_details(
                ErrorCode::InvalidPayload,
                err.to_string(),
                serde_json::json!({ "field": field }),
            ),
        }
    }
}

impl From<TranslationError> for ErrorResponse {
    fn from(err: TranslationError) -> Self {
        Self::new(ErrorCode::TranslationTableError, err.to_string())
    }
}

/// Helper for creating common errors
impl ErrorResponse {
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPayload, message)
    }

    pub fn translation_not_found(class: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TranslationNotFound,
            format!("No translation for error class: {}", class.into()),
        )
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }
}
