use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

use super::translation::MessageTemplate;
use super::value::{display_string, index_into};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap();
}

/// Substitute `{name}` placeholders in a detail template.
///
/// `index_source` maps each placeholder name to a position in the template's
/// own `fields`. When that position holds no non-empty value, the index itself
/// is printed instead (`undefined` when the name is not mapped at all).
pub fn replace_error_message(template: &MessageTemplate, index_source: &Value) -> String {
    PLACEHOLDER
        .replace_all(&template.message, |caps: &Captures<'_>| {
            let index = index_into(index_source, &caps[1]);
            match index.and_then(|i| field_at(&template.fields, i)) {
                Some(field) => field.to_string(),
                None => index.map(display_string).unwrap_or_else(|| "undefined".to_string()),
            }
        })
        .into_owned()
}

fn field_at<'a>(fields: &'a [String], index: &Value) -> Option<&'a str> {
    let position = match index {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.parse::<usize>().ok(),
        _ => None,
    }?;
    fields
        .get(position)
        .map(String::as_str)
        .filter(|field| !field.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(message: &str, fields: &[&str]) -> MessageTemplate {
        MessageTemplate {
            message: message.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_named_placeholder() {
        let t = template("Hello {a}", &["World"]);
        assert_eq!(replace_error_message(&t, &json!({"a": 0})), "Hello World");
    }

    #[test]
    fn test_numeric_placeholders_with_array_source() {
        let t = template("{0} depends on {1}", &["disk", "host"]);
        assert_eq!(replace_error_message(&t, &json!([1, 0])), "host depends on disk");
    }

    #[test]
    fn test_missing_field_prints_index() {
        let t = template("value {a}", &[]);
        assert_eq!(replace_error_message(&t, &json!({"a": 3})), "value 3");
    }

    #[test]
    fn test_empty_field_prints_index() {
        let t = template("value {a}", &[""]);
        assert_eq!(replace_error_message(&t, &json!({"a": 0})), "value 0");
    }

    #[test]
    fn test_unmapped_placeholder() {
        let t = template("value {b}", &["x"]);
        assert_eq!(replace_error_message(&t, &json!({"a": 0})), "value undefined");
    }

    #[test]
    fn test_string_index() {
        let t = template("{a}", &["x", "y"]);
        assert_eq!(replace_error_message(&t, &json!({"a": "1"})), "y");
    }

    #[test]
    fn test_no_placeholders() {
        let t = template("plain text {not a placeholder}", &["x"]);
        assert_eq!(
            replace_error_message(&t, &json!({})),
            "plain text {not a placeholder}"
        );
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(replace_error_message(&MessageTemplate::default(), &json!([])), "");
    }
}
