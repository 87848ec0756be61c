pub mod middleware;
pub mod registry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, TextEncoder};

/// Prometheus exposition of the default registry
pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {}", e),
        )
            .into_response();
    }

    let body = String::from_utf8(buffer).unwrap_or_default();
    (
        StatusCode::OK,
        [("Content-Type", encoder.format_type().to_string())],
        body,
    )
        .into_response()
}

pub use registry::{
    HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS, TRANSLATION_ENTRIES,
    TRANSLATION_LOOKUPS_TOTAL, TRANSLATION_RELOADS_TOTAL,
};
