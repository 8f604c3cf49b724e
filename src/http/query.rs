//! Query-string encoding for GET parameters.
//!
//! The remote API is PHP, so nested values use bracket notation:
//! `{"filter": {"id": [1, 2]}}` becomes `filter[id][]=1&filter[id][]=2`.

use serde_json::Value;

use crate::error::SdkError;

/// Flatten a parameter object into query pairs.
///
/// `null` (including `()` serialized) means no query. `null` members are skipped.
pub fn query_pairs(params: &Value) -> Result<Vec<(String, String)>, SdkError> {
    let mut pairs = Vec::new();
    match params {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_value(&mut pairs, key.clone(), value);
            }
        }
        other => {
            return Err(SdkError::Validation(format!(
                "query parameters must be an object, got {}",
                kind(other)
            )))
        }
    }
    Ok(pairs)
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                push_value(pairs, format!("{}[]", key), item);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_value(pairs, format!("{}[{}]", key, sub), item);
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(value: Value) -> Vec<(String, String)> {
        let mut out = query_pairs(&value).unwrap();
        out.sort();
        out
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_null_is_empty() {
        assert!(pairs(Value::Null).is_empty());
        assert!(pairs(json!({})).is_empty());
    }

    #[test]
    fn test_scalars() {
        let out = pairs(json!({"limit_rows": 50, "query": "acme", "deleted": false, "skip": null}));
        assert_eq!(
            out,
            vec![
                pair("deleted", "false"),
                pair("limit_rows", "50"),
                pair("query", "acme"),
            ]
        );
    }

    #[test]
    fn test_arrays_and_nested_objects() {
        let out = pairs(json!({"id": [1, 2], "filter": {"date": {"from": "2026-01-01"}}}));
        assert_eq!(
            out,
            vec![
                pair("filter[date][from]", "2026-01-01"),
                pair("id[]", "1"),
                pair("id[]", "2"),
            ]
        );
    }

    #[test]
    fn test_non_object_rejected() {
        let err = query_pairs(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg.contains("an array")));
        assert!(query_pairs(&json!("x")).is_err());
    }
}
