use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::value::{display_string, is_present, present_field};

/// Code assigned when a payload cannot be classified
pub const FALLBACK_CODE: i64 = 500;

/// Normalized server error payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (500 when the payload could not be read)
    pub code: i64,
    /// Untranslated error details
    pub details: String,
    /// Server-defined error class, used as the translation key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Detail id and template index source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorData>,
}

/// Detail selector attached to a classified error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorData {
    /// Key into the translation entry's `details`
    pub id: String,
    /// Placeholder name to field index mapping (object, or array for numeric placeholders)
    pub fields: Value,
}

impl ErrorBody {
    pub fn fallback(details: impl Into<String>) -> Self {
        Self {
            code: FALLBACK_CODE,
            details: details.into(),
            class: None,
            data: None,
        }
    }

    /// Build from an object, filling absent `code`/`details` from the given defaults
    fn from_object(map: &Map<String, Value>, default_details: &str) -> Self {
        let code = map
            .get("code")
            .filter(|v| is_present(v))
            .and_then(code_from_value)
            .unwrap_or(FALLBACK_CODE);

        let details = map
            .get("details")
            .filter(|v| is_present(v))
            .map(display_string)
            .unwrap_or_else(|| default_details.to_string());

        let class = map
            .get("class")
            .filter(|v| is_present(v))
            .map(display_string);

        let data = map
            .get("data")
            .filter(|v| is_present(v))
            .map(|data| ErrorData {
                id: data.get("id").map(display_string).unwrap_or_default(),
                fields: data
                    .get("fields")
                    .cloned()
                    .unwrap_or_else(|| Value::Array(Vec::new())),
            });

        Self {
            code,
            details,
            class,
            data,
        }
    }
}

fn code_from_value(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

/// Normalize a raw error payload into an [`ErrorBody`].
///
/// Strings are decoded as JSON; a string that is not a JSON object keeps the raw
/// text as `details` under code 500. Any other value must carry both a present
/// `code` and a present `details`, otherwise it collapses to code 500 with the
/// value's display text as `details`. Never fails.
pub fn get_error_body(data: &Value) -> ErrorBody {
    if let Value::String(raw) = data {
        return match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => ErrorBody::from_object(&map, raw),
            Ok(_) | Err(_) => ErrorBody::fallback(raw.as_str()),
        };
    }

    if present_field(data, "code").is_none() || present_field(data, "details").is_none() {
        return ErrorBody::fallback(display_string(data));
    }

    match data {
        Value::Object(map) => ErrorBody::from_object(map, ""),
        other => ErrorBody::fallback(display_string(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_string_is_decoded() {
        let body = get_error_body(&json!(r#"{"code":1,"details":"x"}"#));
        assert_eq!(body.code, 1);
        assert_eq!(body.details, "x");
        assert!(body.class.is_none());
    }

    #[test]
    fn test_unparseable_string_keeps_raw_text() {
        let body = get_error_body(&json!("not json"));
        assert_eq!(body, ErrorBody::fallback("not json"));
    }

    #[test]
    fn test_object_missing_details_is_stringified() {
        let body = get_error_body(&json!({"code": 1}));
        assert_eq!(body.code, 500);
        assert_eq!(body.details, "[object Object]");
    }

    #[test]
    fn test_zero_code_counts_as_missing() {
        let body = get_error_body(&json!({"code": 0, "details": "x", "class": "X"}));
        assert_eq!(body, ErrorBody::fallback("[object Object]"));
    }

    #[test]
    fn test_complete_object_is_kept() {
        let body = get_error_body(&json!({
            "code": 409,
            "details": "in use",
            "class": "ResourceInUse",
            "data": {"id": "host", "fields": {"name": 0}}
        }));
        assert_eq!(body.code, 409);
        assert_eq!(body.details, "in use");
        assert_eq!(body.class.as_deref(), Some("ResourceInUse"));
        let data = body.data.unwrap();
        assert_eq!(data.id, "host");
        assert_eq!(data.fields, json!({"name": 0}));
    }

    #[test]
    fn test_string_payload_keeps_class() {
        let body = get_error_body(&json!(r#"{"class":"X"}"#));
        assert_eq!(body.code, 500);
        assert_eq!(body.details, r#"{"class":"X"}"#);
        assert_eq!(body.class.as_deref(), Some("X"));
    }

    #[test]
    fn test_non_object_json_string() {
        let body = get_error_body(&json!("42"));
        assert_eq!(body, ErrorBody::fallback("42"));
    }

    #[test]
    fn test_data_defaults() {
        let body = get_error_body(&json!({"code": 1, "details": "d", "data": {"other": true}}));
        let data = body.data.unwrap();
        assert_eq!(data.id, "");
        assert_eq!(data.fields, json!([]));
    }
}
