//! Error shape reported by the admin front-end's HTTP client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A failed HTTP call as seen by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HttpClientError {
    /// Response received from the backend, absent on network failures
    #[serde(default)]
    pub response: Option<HttpResponse>,
    /// Configuration of the request that failed
    #[serde(default)]
    pub config: Option<RequestConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HttpResponse {
    #[serde(default)]
    pub status: Option<u16>,
    /// Raw error payload, a JSON string or an object
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RequestConfig {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub headers: Option<Value>,
    /// Query parameters, possibly JSON-encoded
    #[serde(default)]
    pub params: Option<Value>,
    /// Request body, possibly JSON-encoded
    #[serde(default)]
    pub data: Option<Value>,
}
