use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Query parameters whose values never reach the logs
const SECRET_PARAMS: &[&str] = &["api_key", "token", "password", "secret", "access_token"];

/// Log every request and its outcome with a per-request id
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = mask_query(request.uri().query().unwrap_or(""));

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = %query,
        "Incoming request"
    );

    let response = next.run(request).await;
    log_outcome(&request_id, &method, &path, response.status(), start.elapsed());
    response
}

fn log_outcome(request_id: &str, method: &str, path: &str, status: StatusCode, elapsed: Duration) {
    let duration_ms = elapsed.as_millis();
    if status.is_client_error() || status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }
}

/// Replace the values of secret query parameters with `***`
fn mask_query(query: &str) -> String {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SECRET_PARAMS.contains(&key) => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}
