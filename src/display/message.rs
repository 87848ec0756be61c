use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use super::body::get_error_body;
use super::http::HttpClientError;
use super::template::replace_error_message;
use super::translation::TranslationTable;
use super::value::is_present;
use crate::metrics::registry::TRANSLATION_LOOKUPS_TOTAL;

/// Where the error payload comes from
#[derive(Debug, Clone, Copy)]
pub enum ErrorSource<'a> {
    /// Full client error; the payload is `response.data`
    Http(&'a HttpClientError),
    /// Payload that was already extracted
    Body(&'a Value),
}

/// Human-readable rendering of a classified server error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HttpErrorMessage {
    /// Translated class label, or the raw class id
    pub class: String,
    /// Translated detail message, or the server's details
    pub detail: String,
    /// The payload the message was derived from
    pub resource: Value,
}

/// Translate an HTTP error into a display message.
///
/// Returns `None` when the source carries no payload or the payload has no
/// error class.
pub fn get_http_error_message(
    table: &TranslationTable,
    source: ErrorSource<'_>,
) -> Option<HttpErrorMessage> {
    let payload = match source {
        ErrorSource::Body(body) => body,
        ErrorSource::Http(err) => err
            .response
            .as_ref()?
            .data
            .as_ref()
            .filter(|data| is_present(data))?,
    };

    let body = get_error_body(payload);
    let class = body.class?;
    let mut detail = body.details;

    let entry = table.get(&class);
    if let (Some(entry), Some(data)) = (entry, body.data.as_ref()) {
        if let Some(template) = entry.detail_template(&data.id, table.locale()) {
            detail = replace_error_message(template, &data.fields);
        }
    }

    let label = entry.and_then(|e| e.label(table.locale()));
    let outcome = if label.is_some() { "translated" } else { "untranslated" };
    TRANSLATION_LOOKUPS_TOTAL.with_label_values(&[outcome]).inc();
    debug!("Error class '{}' {}", class, outcome);

    Some(HttpErrorMessage {
        class: label.map(str::to_string).unwrap_or(class),
        detail,
        resource: payload.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::http::HttpResponse;
    use serde_json::json;

    fn table() -> TranslationTable {
        TranslationTable::from_json_str(
            r#"{
                "X": {
                    "zh-CN": "X错误",
                    "details": {
                        "id1": {"zh-CN": {"message": "Hello {a}", "fields": ["World"]}}
                    }
                },
                "Unlabelled": {"en": "only english"}
            }"#,
            "zh-CN",
        )
        .unwrap()
    }

    fn http_error(data: Option<Value>) -> HttpClientError {
        HttpClientError {
            response: Some(HttpResponse {
                status: Some(400),
                data,
            }),
            config: None,
        }
    }

    #[test]
    fn test_no_response() {
        let err = HttpClientError::default();
        assert!(get_http_error_message(&table(), ErrorSource::Http(&err)).is_none());
    }

    #[test]
    fn test_empty_response_data() {
        let err = http_error(Some(json!("")));
        assert!(get_http_error_message(&table(), ErrorSource::Http(&err)).is_none());
        let err = http_error(None);
        assert!(get_http_error_message(&table(), ErrorSource::Http(&err)).is_none());
    }

    #[test]
    fn test_unclassified_payload() {
        let body = json!({"code": 400, "details": "bad"});
        assert!(get_http_error_message(&table(), ErrorSource::Body(&body)).is_none());
    }

    #[test]
    fn test_translated_detail() {
        let body = json!({
            "code": 400,
            "class": "X",
            "details": "d",
            "data": {"id": "id1", "fields": {"a": 0}}
        });
        let message = get_http_error_message(&table(), ErrorSource::Body(&body)).unwrap();
        assert_eq!(message.class, "X错误");
        assert_eq!(message.detail, "Hello World");
        assert_eq!(message.resource, body);
    }

    #[test]
    fn test_unknown_detail_id_keeps_details() {
        let body = json!({
            "code": 400,
            "class": "X",
            "details": "d",
            "data": {"id": "other", "fields": {}}
        });
        let message = get_http_error_message(&table(), ErrorSource::Body(&body)).unwrap();
        assert_eq!(message.class, "X错误");
        assert_eq!(message.detail, "d");
    }

    #[test]
    fn test_untranslated_class() {
        let err = http_error(Some(json!(r#"{"code":500,"class":"Y","details":"boom"}"#)));
        let message = get_http_error_message(&table(), ErrorSource::Http(&err)).unwrap();
        assert_eq!(message.class, "Y");
        assert_eq!(message.detail, "boom");
        assert_eq!(
            message.resource,
            json!(r#"{"code":500,"class":"Y","details":"boom"}"#)
        );
    }

    #[test]
    fn test_entry_without_locale_label() {
        let body = json!({"code": 1, "class": "Unlabelled", "details": "d"});
        let message = get_http_error_message(&table(), ErrorSource::Body(&body)).unwrap();
        assert_eq!(message.class, "Unlabelled");
    }
}
