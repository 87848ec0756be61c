use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    admin_reload, delete_result, get_translation, health, normalize_error_body,
    summarize_request, translate_error, AppState,
};
use super::middleware::logging_middleware;
use super::openapi::ApiDoc;
use crate::metrics;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        // Display helpers
        .route("/errors/body", post(normalize_error_body))
        .route("/errors/message", post(translate_error))
        .route("/requests/summary", post(summarize_request))
        .route("/rows/delete-result", post(delete_result))
        .route("/translations/:class", get(get_translation))
        // Prometheus
        .route("/metrics", get(metrics::metrics_handler))
        .route("/admin/reload", post(admin_reload))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Order matters: logging -> metrics -> cors -> trace
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics::middleware::track_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
