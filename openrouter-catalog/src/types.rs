use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Catalog record
// ---------------------------------------------------------------------------

/// One entry of the OpenRouter `/models` catalog.
///
/// Upstream records are heterogeneous: apart from `id` (`<provider>/<name>`) every
/// field may be absent or carry an unexpected JSON type, so the record is kept as a
/// raw JSON object and read through typed accessors instead of a fixed struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelRecord(Map<String, Value>);

impl ModelRecord {
    /// Build a record from an arbitrary JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`, if present and actually a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// True only when `key` holds JSON `true`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    /// The `<provider>/<name>` identifier.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(ModelRecord::from_value(json!("openai/gpt-4o")).is_none());
        assert!(ModelRecord::from_value(json!([1, 2])).is_none());
        assert!(ModelRecord::from_value(json!({"id": "openai/gpt-4o"})).is_some());
    }

    #[test]
    fn accessors_ignore_wrong_types() {
        let record = ModelRecord::from_value(json!({
            "id": 42,
            "name": "GPT",
            "supports_tools": "yes",
            "supports_function_calling": true
        }))
        .unwrap();
        assert_eq!(record.id(), None);
        assert_eq!(record.get_str("name"), Some("GPT"));
        assert!(!record.flag("supports_tools"));
        assert!(record.flag("supports_function_calling"));
        assert!(!record.flag("missing"));
    }

    #[test]
    fn deserializes_transparently_and_keeps_unknown_keys() {
        let record: ModelRecord =
            serde_json::from_str(r#"{"id":"x/y","architecture":{"modality":"text"}}"#).unwrap();
        assert_eq!(record.id(), Some("x/y"));
        assert!(record.get("architecture").is_some());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": "x/y", "architecture": {"modality": "text"}})
        );
    }
}
