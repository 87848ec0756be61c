use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Error codes for structured API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body could not be read
    InvalidPayload,

    /// Client error has no request config to summarize
    MissingRequestConfig,

    /// Input validation failed
    ValidationError,

    /// No translation for the requested error class
    TranslationNotFound,

    /// Translation table could not be loaded
    TranslationTableError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::MissingRequestConfig => "MISSING_REQUEST_CONFIG",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::TranslationNotFound => "TRANSLATION_NOT_FOUND",
            Self::TranslationTableError => "TRANSLATION_TABLE_ERROR",
        };
        f.write_str(name)
    }
}

impl ErrorCode {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidPayload => 400,
            Self::MissingRequestConfig => 400,
            Self::ValidationError => 400,
            Self::TranslationNotFound => 404,
            Self::TranslationTableError => 503,
        }
    }
}
