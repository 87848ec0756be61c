use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

use super::message::{get_http_error_message, ErrorSource};
use super::translation::TranslationTable;
use super::value::is_present;

pub const DEFAULT_DELETE_FIELD: &str = "can_delete";
pub const DEFAULT_FAIL_KEY: &str = "delete_fail_reason";

/// Row field names consulted for delete permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFields {
    /// Flag allowing the row to be deleted
    pub delete_field: String,
    /// JSON-encoded reason, wrapping an error body under `error`
    pub fail_key: String,
}

impl Default for DeleteFields {
    fn default() -> Self {
        Self {
            delete_field: DEFAULT_DELETE_FIELD.to_string(),
            fail_key: DEFAULT_FAIL_KEY.to_string(),
        }
    }
}

/// Delete permission for one row or a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    pub validate: bool,
    /// Why the row cannot be deleted; only computed for single rows
    pub tooltip: Option<String>,
}

impl DeleteResult {
    fn denied() -> Self {
        Self {
            validate: false,
            tooltip: None,
        }
    }
}

/// Decide whether a row, or every row of a selection, may be deleted.
///
/// A denied single row gets a tooltip built from its translated fail reason.
/// Selections never get a tooltip.
pub fn get_delete_result(
    table: &TranslationTable,
    row: &Value,
    fields: &DeleteFields,
) -> DeleteResult {
    if let Value::Array(rows) = row {
        if rows.is_empty() {
            return DeleteResult::denied();
        }
        return DeleteResult {
            validate: rows.iter().all(|r| deletable(r, &fields.delete_field)),
            tooltip: None,
        };
    }

    if deletable(row, &fields.delete_field) {
        return DeleteResult {
            validate: true,
            tooltip: None,
        };
    }

    DeleteResult {
        validate: false,
        tooltip: fail_reason_tooltip(table, row, &fields.fail_key),
    }
}

fn deletable(row: &Value, delete_field: &str) -> bool {
    row.get(delete_field).map(is_present).unwrap_or(false)
}

fn fail_reason_tooltip(table: &TranslationTable, row: &Value, fail_key: &str) -> Option<String> {
    let raw = row.get(fail_key)?.as_str()?;

    let reason: Value = match serde_json::from_str(raw) {
        Ok(reason) => reason,
        Err(e) => {
            warn!("{} is not valid JSON: {}", fail_key, e);
            return None;
        }
    };
    if !is_present(&reason) {
        return None;
    }

    let message = reason
        .get("error")
        .and_then(|error| get_http_error_message(table, ErrorSource::Body(error)));

    match message {
        Some(message) => Some(format!("{}: {}", message.class, message.detail)),
        None => {
            warn!("{} carries no classified error", fail_key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> TranslationTable {
        TranslationTable::from_json_str(
            r#"{
                "ResourceInUse": {
                    "zh-CN": "资源占用",
                    "details": {
                        "bound": {"zh-CN": {"message": "已被 {owner} 使用", "fields": ["web-01"]}}
                    }
                }
            }"#,
            "zh-CN",
        )
        .unwrap()
    }

    fn check(row: Value) -> DeleteResult {
        get_delete_result(&table(), &row, &DeleteFields::default())
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(check(json!([])), DeleteResult::denied());
    }

    #[test]
    fn test_selection_requires_every_row() {
        assert_eq!(
            check(json!([{"can_delete": true}, {"can_delete": false}])),
            DeleteResult {
                validate: false,
                tooltip: None
            }
        );
        assert_eq!(
            check(json!([{"can_delete": true}, {"can_delete": 1}])),
            DeleteResult {
                validate: true,
                tooltip: None
            }
        );
    }

    #[test]
    fn test_selection_never_explains() {
        let reason = json!({"error": {"code": 409, "class": "ResourceInUse", "details": "d"}});
        let result = check(json!([{"can_delete": false, "delete_fail_reason": reason.to_string()}]));
        assert!(!result.validate);
        assert!(result.tooltip.is_none());
    }

    #[test]
    fn test_deletable_row() {
        assert_eq!(
            check(json!({"can_delete": true})),
            DeleteResult {
                validate: true,
                tooltip: None
            }
        );
    }

    #[test]
    fn test_denied_row_with_reason() {
        let reason = json!({
            "error": {
                "code": 409,
                "class": "ResourceInUse",
                "details": "in use",
                "data": {"id": "bound", "fields": {"owner": 0}}
            }
        });
        let result = check(json!({"can_delete": false, "delete_fail_reason": reason.to_string()}));
        assert!(!result.validate);
        assert_eq!(result.tooltip.as_deref(), Some("资源占用: 已被 web-01 使用"));
    }

    #[test]
    fn test_invalid_reason_json() {
        let result = check(json!({"can_delete": false, "delete_fail_reason": "not json"}));
        assert_eq!(result, DeleteResult::denied());
    }

    #[test]
    fn test_reason_without_error() {
        let result = check(json!({"can_delete": false, "delete_fail_reason": "{\"other\":1}"}));
        assert_eq!(result, DeleteResult::denied());
    }

    #[test]
    fn test_non_string_reason_is_ignored() {
        let result = check(json!({
            "can_delete": false,
            "delete_fail_reason": {"error": {"code": 1, "class": "ResourceInUse", "details": "d"}}
        }));
        assert_eq!(result, DeleteResult::denied());
    }

    #[test]
    fn test_custom_field_names() {
        let fields = DeleteFields {
            delete_field: "removable".to_string(),
            fail_key: "why".to_string(),
        };
        let reason = json!({"error": {"code": 1, "class": "Other", "details": "locked"}});
        let row = json!({"removable": false, "why": reason.to_string()});
        let result = get_delete_result(&table(), &row, &fields);
        assert_eq!(result.tooltip.as_deref(), Some("Other: locked"));
    }
}
