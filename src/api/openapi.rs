use utoipa::OpenApi;

use crate::api::handlers::{
    DeleteResultRequest, DeleteResultResponse, ErrorBodyRequest, ErrorBodyResponse,
    ErrorMessageRequest, ErrorMessageResponse, ReloadResponse, RequestSummaryResponse,
};
use crate::display::{
    DeleteResult, ErrorBody, ErrorData, HttpClientError, HttpErrorMessage, HttpResponse,
    RequestConfig, RequestSummary,
};
use crate::errors::{ErrorCode, ErrorDetail, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin Error Display",
        version = "0.1.0",
        description = "Presentation helpers for an admin console: normalizes backend error payloads, translates classified errors through a localized table, summarizes failed requests and explains row delete permissions.",
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::normalize_error_body,
        crate::api::handlers::translate_error,
        crate::api::handlers::summarize_request,
        crate::api::handlers::delete_result,
        crate::api::handlers::get_translation,
        crate::api::handlers::admin_reload,
    ),
    components(
        schemas(
            ErrorBody,
            ErrorData,
            HttpClientError,
            HttpResponse,
            RequestConfig,
            HttpErrorMessage,
            RequestSummary,
            DeleteResult,
            ErrorBodyRequest,
            ErrorMessageRequest,
            DeleteResultRequest,
            ErrorBodyResponse,
            ErrorMessageResponse,
            RequestSummaryResponse,
            DeleteResultResponse,
            ReloadResponse,
            ErrorResponse,
            ErrorDetail,
            ErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "errors", description = "Error payload normalization and translation"),
        (name = "requests", description = "Failed request summaries"),
        (name = "rows", description = "List row permissions"),
        (name = "translations", description = "Translation table lookups"),
        (name = "admin", description = "Administrative endpoints"),
    )
)]
pub struct ApiDoc;
