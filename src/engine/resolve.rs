//! Dotted-path lookups and value stringification for the template engine

use serde_json::Value;

/// Walks `data` along a dot-separated `path`, one mapping key per segment.
///
/// Returns `None` as soon as a segment is missing or the value being
/// descended into is not a mapping. Sequences are not indexable.
///
/// # Examples
/// ```
/// use demogen::engine::resolve_path;
/// use serde_json::json;
///
/// let data = json!({"company": {"name": "Acme"}});
/// assert_eq!(resolve_path(&data, "company.name"), Some(&json!("Acme")));
/// assert_eq!(resolve_path(&data, "company.city"), None);
/// ```
pub fn resolve_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(data, |current, segment| current.as_object()?.get(segment))
}

/// Converts a resolved value to the text that replaces its marker.
///
/// Strings are inserted as-is, numbers and booleans use their JSON text,
/// `null` becomes the empty string, and sequences or mappings are written as
/// compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_single_segment() {
        let data = json!({"name": "Resort"});
        assert_eq!(resolve_path(&data, "name"), Some(&json!("Resort")));
        assert_eq!(resolve_path(&data, "missing"), None);
    }

    #[test]
    fn test_resolve_dotted_path_matches_sequential_lookups() {
        let data = json!({"a": {"b": {"c": 42}}});

        let stepwise = data
            .get("a")
            .and_then(|v| v.get("b"))
            .and_then(|v| v.get("c"));

        assert_eq!(resolve_path(&data, "a.b.c"), stepwise);
        assert_eq!(resolve_path(&data, "a.b.c"), Some(&json!(42)));
    }

    #[test]
    fn test_resolve_undefined_intermediate() {
        let data = json!({"user": {"name": "Jo"}, "tag": "x"});
        assert_eq!(resolve_path(&data, "user.city"), None);
        assert_eq!(resolve_path(&data, "account.city"), None);
        // A string is not a mapping, so it cannot be descended into
        assert_eq!(resolve_path(&data, "tag.len"), None);
    }

    #[test]
    fn test_resolve_does_not_index_sequences() {
        let data = json!({"items": ["a", "b"]});
        assert_eq!(resolve_path(&data, "items.0"), None);
    }

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify(&json!("$299")), "$299");
        assert_eq!(stringify(&json!(299)), "299");
        assert_eq!(stringify(&json!(2.5)), "2.5");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!(false)), "false");
        assert_eq!(stringify(&Value::Null), "");
    }

    #[test]
    fn test_stringify_compound_values_as_compact_json() {
        assert_eq!(stringify(&json!(["a", 1, true])), r#"["a",1,true]"#);
        assert_eq!(
            stringify(&json!({"a": 1, "b": [true, null]})),
            r#"{"a":1,"b":[true,null]}"#
        );
    }
}
