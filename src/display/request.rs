use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use super::http::HttpClientError;
use super::value::is_present;

#[derive(Debug, Error)]
pub enum RequestSummaryError {
    #[error("error carries no request config")]
    MissingConfig,

    #[error("request {field} is not valid JSON: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Displayable description of the request behind an HTTP error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RequestSummary {
    pub method: Option<String>,
    pub url: Option<String>,
    pub headers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Rebuild the originating request of an HTTP error for debugging displays.
///
/// String-encoded `data` and `params` are decoded; a decoding failure is
/// returned rather than swallowed.
pub fn get_http_req_message(error: &HttpClientError) -> Result<RequestSummary, RequestSummaryError> {
    let config = error
        .config
        .as_ref()
        .ok_or(RequestSummaryError::MissingConfig)?;

    Ok(RequestSummary {
        method: config.method.clone(),
        url: config.url.clone(),
        headers: config.headers.clone(),
        data: decode_field("data", config.data.as_ref())?,
        params: decode_field("params", config.params.as_ref())?,
    })
}

fn decode_field(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<Value>, RequestSummaryError> {
    match value.filter(|v| is_present(v)) {
        None => Ok(None),
        Some(Value::String(raw)) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| RequestSummaryError::InvalidJson { field, source }),
        Some(other) => Ok(Some(other.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::http::RequestConfig;
    use serde_json::json;

    fn error_with(config: RequestConfig) -> HttpClientError {
        HttpClientError {
            response: None,
            config: Some(config),
        }
    }

    #[test]
    fn test_summary_decodes_string_body() {
        let err = error_with(RequestConfig {
            method: Some("post".to_string()),
            url: Some("/api/v1/hosts".to_string()),
            headers: Some(json!({"Content-Type": "application/json"})),
            params: Some(json!({"scope": "project"})),
            data: Some(json!(r#"{"name":"web-01"}"#)),
        });

        let summary = get_http_req_message(&err).unwrap();
        assert_eq!(summary.method.as_deref(), Some("post"));
        assert_eq!(summary.url.as_deref(), Some("/api/v1/hosts"));
        assert_eq!(summary.data, Some(json!({"name": "web-01"})));
        assert_eq!(summary.params, Some(json!({"scope": "project"})));
    }

    #[test]
    fn test_absent_body_is_omitted() {
        let err = error_with(RequestConfig {
            method: Some("get".to_string()),
            url: Some("/api/v1/hosts".to_string()),
            data: Some(json!("")),
            ..Default::default()
        });

        let summary = get_http_req_message(&err).unwrap();
        assert!(summary.data.is_none());
        assert!(summary.params.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["headers"], Value::Null);
    }

    #[test]
    fn test_invalid_json_params() {
        let err = error_with(RequestConfig {
            params: Some(json!("{broken")),
            ..Default::default()
        });

        match get_http_req_message(&err) {
            Err(RequestSummaryError::InvalidJson { field, .. }) => assert_eq!(field, "params"),
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_config() {
        let err = HttpClientError::default();
        assert!(matches!(
            get_http_req_message(&err),
            Err(RequestSummaryError::MissingConfig)
        ));
    }
}
