//! Data context - the value tree every template is rendered against

use serde_json::{Map, Value as JsonValue};
use std::path::Path;
use tokio::fs;

use crate::engine::resolve_path;
use crate::generation::GenerationError;

/// Root mapping supplied to the template engine
#[derive(Debug, Clone, PartialEq)]
pub struct DataContext {
    data: Map<String, JsonValue>,
}

impl DataContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self { data: Map::new() }
    }

    /// Wrap an existing value. The root must be a mapping.
    pub fn from_value(value: JsonValue) -> Result<Self, GenerationError> {
        match value {
            JsonValue::Object(data) => Ok(Self { data }),
            other => Err(GenerationError::InvalidContext(format!(
                "root must be a mapping, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Load a context from a `.json`, `.yml` or `.yaml` file
    pub async fn from_file(path: &Path) -> Result<Self, GenerationError> {
        let content = fs::read_to_string(path).await?;

        let value: JsonValue = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            _ => {
                return Err(GenerationError::UnsupportedFormat(
                    path.display().to_string(),
                ));
            }
        };

        tracing::debug!(path = %path.display(), "Loaded data context from file");
        Self::from_value(value)
    }

    /// Add or replace a top-level variable
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.data.insert(key.to_string(), value);
    }

    /// Shallow merge: top-level keys of `other` replace existing ones
    pub fn merge(&mut self, other: DataContext) {
        self.data.extend(other.data);
    }

    /// Check if a top-level variable exists
    pub fn has_variable(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Resolve a dotted path the same way placeholders are resolved
    pub fn get(&self, path: &str) -> Option<&JsonValue> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let value = self.data.get(head)?;
        match rest {
            Some(rest) => resolve_path(value, rest),
            None => Some(value),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The context as a JSON value for rendering
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.data.clone())
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.data)
    }
}

impl Default for DataContext {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_add_variable_and_get() {
        let mut context = DataContext::new();
        assert!(context.is_empty());

        context.add_variable("company_name", json!("Sunny Resorts"));
        context.add_variable("company", json!({"address": {"city": "Lisbon"}}));

        assert_eq!(context.len(), 2);
        assert!(context.has_variable("company_name"));
        assert_eq!(context.get("company_name"), Some(&json!("Sunny Resorts")));
        assert_eq!(context.get("company.address.city"), Some(&json!("Lisbon")));
        assert_eq!(context.get("company.address.zip"), None);
        assert_eq!(context.get("missing"), None);
    }

    #[test]
    fn test_from_value_requires_mapping() {
        assert!(DataContext::from_value(json!({"a": 1})).is_ok());

        let error = DataContext::from_value(json!(["a"])).unwrap_err();
        assert!(matches!(error, GenerationError::InvalidContext(_)));
        assert!(error.to_string().contains("found a sequence"));
    }

    #[test]
    fn test_merge_replaces_top_level_keys() {
        let mut base = DataContext::from_value(json!({
            "industry": "travel",
            "company": {"name": "Old", "size": 5}
        }))
        .unwrap();
        let generated = DataContext::from_value(json!({
            "company": {"name": "New"},
            "tagline": "Go further"
        }))
        .unwrap();

        base.merge(generated);

        assert_eq!(
            base.into_value(),
            json!({
                "industry": "travel",
                "company": {"name": "New"},
                "tagline": "Go further"
            })
        );
    }

    #[tokio::test]
    async fn test_from_file_json_and_yaml() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let json_path = temp_dir.path().join("data.json");
        std::fs::write(&json_path, r#"{"products": [{"name": "Suite"}]}"#).unwrap();
        let context = DataContext::from_file(&json_path).await.unwrap();
        assert_eq!(context.get("products"), Some(&json!([{"name": "Suite"}])));

        let yaml_path = temp_dir.path().join("data.yaml");
        std::fs::write(&yaml_path, "tagline: Go further\nbadges:\n  - Popular\n  - New\n").unwrap();
        let context = DataContext::from_file(&yaml_path).await.unwrap();
        assert_eq!(context.get("tagline"), Some(&json!("Go further")));
        assert_eq!(context.get("badges"), Some(&json!(["Popular", "New"])));
    }

    #[tokio::test]
    async fn test_from_file_rejects_unknown_extension_and_non_mapping() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let txt_path = temp_dir.path().join("data.txt");
        std::fs::write(&txt_path, "{}").unwrap();
        let error = DataContext::from_file(&txt_path).await.unwrap_err();
        assert!(matches!(error, GenerationError::UnsupportedFormat(_)));

        let list_path = temp_dir.path().join("list.json");
        std::fs::write(&list_path, "[1, 2]").unwrap();
        let error = DataContext::from_file(&list_path).await.unwrap_err();
        assert!(matches!(error, GenerationError::InvalidContext(_)));

        let missing = DataContext::from_file(&temp_dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(GenerationError::IoError(_))));
    }
}
