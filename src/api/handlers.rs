use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::config::TranslationConfig;
use crate::display::{
    get_delete_result, get_error_body, get_http_error_message, get_http_req_message,
    DeleteFields, DeleteResult, ErrorBody, ErrorSource, HttpClientError, HttpErrorMessage,
    RequestSummary, TranslationError, TranslationTable,
};
use crate::errors::response::ErrorDetail;
use crate::errors::ErrorResponse;
use crate::metrics::{TRANSLATION_ENTRIES, TRANSLATION_RELOADS_TOTAL};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    translations: RwLock<Arc<TranslationTable>>,
    pub translation_config: TranslationConfig,
    pub instance_id: String,
}

impl AppStateInner {
    pub fn new(
        table: TranslationTable,
        translation_config: TranslationConfig,
        instance_id: impl Into<String>,
    ) -> Self {
        TRANSLATION_ENTRIES.set(table.len() as i64);
        Self {
            translations: RwLock::new(Arc::new(table)),
            translation_config,
            instance_id: instance_id.into(),
        }
    }

    /// Snapshot of the current translation table
    pub async fn translations(&self) -> Arc<TranslationTable> {
        self.translations.read().await.clone()
    }

    /// Re-read the configured table file and swap it in
    pub async fn reload_translations(&self) -> Result<usize, TranslationError> {
        let table = load_translations(&self.translation_config)?;
        let entries = table.len();
        *self.translations.write().await = Arc::new(table);
        TRANSLATION_ENTRIES.set(entries as i64);
        Ok(entries)
    }
}

/// Load the translation table named by the configuration
pub fn load_translations(config: &TranslationConfig) -> Result<TranslationTable, TranslationError> {
    match &config.table_path {
        Some(path) => TranslationTable::from_path(path, config.locale.as_str()),
        None => {
            warn!("TRANSLATION_TABLE_PATH not set, error classes will not be translated");
            Ok(TranslationTable::empty(config.locale.as_str()))
        }
    }
}

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorDetail>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

fn rejected(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    ErrorResponse::invalid_payload(rejection.body_text()).into_response()
}

/// Raw error payload to normalize
#[derive(Debug, Deserialize, ToSchema)]
pub struct ErrorBodyRequest {
    /// JSON-encoded string or object
    pub data: Value,
}

/// Error to translate; exactly one of `error` and `body` is set
#[derive(Debug, Deserialize, ToSchema)]
pub struct ErrorMessageRequest {
    /// Full HTTP client error
    pub error: Option<HttpClientError>,
    /// Already extracted error body
    pub body: Option<Value>,
}

/// Row or selection to check for delete permission
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteResultRequest {
    /// Single row object, or an array of rows
    pub rows: Value,
    /// Permission flag field (default `can_delete`)
    pub delete_field: Option<String>,
    /// Fail reason field (default `delete_fail_reason`)
    pub fail_key: Option<String>,
}

impl DeleteResultRequest {
    fn fields(&self) -> Result<DeleteFields, ErrorResponse> {
        let defaults = DeleteFields::default();
        let delete_field = self.delete_field.clone().unwrap_or(defaults.delete_field);
        let fail_key = self.fail_key.clone().unwrap_or(defaults.fail_key);

        if delete_field.is_empty() || fail_key.is_empty() {
            return Err(ErrorResponse::validation_error(
                "delete_field and fail_key must not be empty",
            ));
        }
        Ok(DeleteFields {
            delete_field,
            fail_key,
        })
    }
}

// Concrete response types for OpenAPI generation
/// Normalized error body response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBodyResponse {
    pub success: bool,
    pub data: Option<ErrorBody>,
    pub error: Option<ErrorDetail>,
}

/// Translated error message response; `data` is null for unclassified errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessageResponse {
    pub success: bool,
    pub data: Option<HttpErrorMessage>,
    pub error: Option<ErrorDetail>,
}

/// Request summary response
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestSummaryResponse {
    pub success: bool,
    pub data: Option<RequestSummary>,
    pub error: Option<ErrorDetail>,
}

/// Delete permission response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResultResponse {
    pub success: bool,
    pub data: Option<DeleteResult>,
    pub error: Option<ErrorDetail>,
}

/// Reload response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReloadResponse {
    pub success: bool,
    /// Number of error classes loaded
    pub data: Option<usize>,
    pub error: Option<ErrorDetail>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let table = state.translations().await;
    Json(serde_json::json!({
        "status": "healthy",
        "service": "admin-error-display",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "translation": {
            "locale": table.locale(),
            "entries": table.len(),
        },
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// Normalize a raw error payload
#[utoipa::path(
    post,
    path = "/errors/body",
    tag = "errors",
    request_body = ErrorBodyRequest,
    responses(
        (status = 200, description = "Normalized error body", body = ErrorBodyResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn normalize_error_body(
    payload: Result<Json<ErrorBodyRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(req)) => ok(get_error_body(&req.data)),
        Err(rejection) => rejected(rejection),
    }
}

/// Translate an HTTP error into a display message
#[utoipa::path(
    post,
    path = "/errors/message",
    tag = "errors",
    request_body = ErrorMessageRequest,
    responses(
        (status = 200, description = "Translated message, null when the error is not classified", body = ErrorMessageResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn translate_error(
    State(state): State<AppState>,
    payload: Result<Json<ErrorMessageRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected(rejection),
    };

    let source = match (&req.error, &req.body) {
        (Some(error), None) => ErrorSource::Http(error),
        (None, Some(body)) => ErrorSource::Body(body),
        _ => {
            return ErrorResponse::validation_error("Provide exactly one of 'error' or 'body'")
                .into_response()
        }
    };

    let table = state.translations().await;
    let message = get_http_error_message(&table, source);
    if message.is_none() {
        info!("Error is not a classified server error");
    }
    ok(message)
}

/// Summarize the request behind an HTTP error
#[utoipa::path(
    post,
    path = "/requests/summary",
    tag = "requests",
    request_body = HttpClientError,
    responses(
        (status = 200, description = "Request summary", body = RequestSummaryResponse),
        (status = 400, description = "Missing config or undecodable body/params", body = ErrorResponse)
    )
)]
pub async fn summarize_request(payload: Result<Json<HttpClientError>, JsonRejection>) -> Response {
    let error = match payload {
        Ok(Json(error)) => error,
        Err(rejection) => return rejected(rejection),
    };

    match get_http_req_message(&error) {
        Ok(summary) => ok(summary),
        Err(e) => {
            warn!("Request summary failed: {}", e);
            ErrorResponse::from(e).into_response()
        }
    }
}

/// Check delete permission for a row or selection
#[utoipa::path(
    post,
    path = "/rows/delete-result",
    tag = "rows",
    request_body = DeleteResultRequest,
    responses(
        (status = 200, description = "Delete permission", body = DeleteResultResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn delete_result(
    State(state): State<AppState>,
    payload: Result<Json<DeleteResultRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected(rejection),
    };
    let fields = match req.fields() {
        Ok(fields) => fields,
        Err(e) => return e.into_response(),
    };

    let table = state.translations().await;
    ok(get_delete_result(&table, &req.rows, &fields))
}

/// Look up the translation entry of an error class
#[utoipa::path(
    get,
    path = "/translations/{class}",
    tag = "translations",
    params(
        ("class" = String, Path, description = "Error class identifier")
    ),
    responses(
        (status = 200, description = "Translation entry", body = serde_json::Value),
        (status = 404, description = "Unknown error class", body = ErrorResponse)
    )
)]
pub async fn get_translation(
    State(state): State<AppState>,
    Path(class): Path<String>,
) -> Response {
    let table = state.translations().await;
    match table.get(&class) {
        Some(entry) => ok(entry),
        None => ErrorResponse::translation_not_found(class).into_response(),
    }
}

/// Reload the translation table from disk
#[utoipa::path(
    post,
    path = "/admin/reload",
    tag = "admin",
    responses(
        (status = 200, description = "Translation table reloaded", body = ReloadResponse),
        (status = 503, description = "Reload failed, previous table kept", body = ErrorResponse)
    )
)]
pub async fn admin_reload(State(state): State<AppState>) -> Response {
    info!("Admin reload request");

    match state.reload_translations().await {
        Ok(entries) => {
            TRANSLATION_RELOADS_TOTAL.with_label_values(&["success"]).inc();
            info!("Translation table reloaded with {} entries", entries);
            ok(entries)
        }
        Err(e) => {
            TRANSLATION_RELOADS_TOTAL.with_label_values(&["failure"]).inc();
            error!("Translation table reload failed: {}", e);
            ErrorResponse::from(e).into_response()
        }
    }
}
