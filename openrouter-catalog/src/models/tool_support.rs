//! Heuristic tool-calling capability detection.

use crate::types::ModelRecord;

/// Model id fragments known to support tool calling. Matched as case-insensitive
/// substrings of the model id when the record carries no explicit capability flag.
/// Hand-maintained: new model families will not match until added here.
pub const TOOL_CAPABLE_PATTERNS: &[&str] = &[
    "gpt-4o",
    "gpt-4-turbo",
    "gpt-4",
    "gpt-3.5-turbo",
    "claude-3",
    "claude-3.5",
    "gemini-1.5",
    "gemini-pro",
    "llama-3.1",
    "llama-3.2",
    "mistral-large",
    "mixtral",
];

/// Prefix prepended to the display line of tool-capable models.
pub const TOOL_INDICATOR: &str = "🔧 ";

/// Explicit `supports_tools` / `supports_function_calling` flags (JSON `true` only).
pub fn has_explicit_tool_flag(record: &ModelRecord) -> bool {
    record.flag("supports_tools") || record.flag("supports_function_calling")
}

/// True if the id contains one of [`TOOL_CAPABLE_PATTERNS`], ignoring case.
pub fn matches_tool_pattern(model_id: &str) -> bool {
    let lower = model_id.to_lowercase();
    TOOL_CAPABLE_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Effective capability: explicit flags first, then the id pattern list.
pub fn supports_tools(record: &ModelRecord, model_id: &str) -> bool {
    has_explicit_tool_flag(record) || matches_tool_pattern(model_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ModelRecord {
        ModelRecord::from_value(value).unwrap()
    }

    #[test]
    fn pattern_match_is_case_insensitive_substring() {
        assert!(matches_tool_pattern("anthropic/claude-3.5-sonnet"));
        assert!(matches_tool_pattern("OpenAI/GPT-4o-Mini"));
        assert!(matches_tool_pattern("mistralai/Mixtral-8x7b-instruct"));
        assert!(matches_tool_pattern("meta-llama/llama-3.1-70b-instruct"));
        assert!(!matches_tool_pattern("deepseek/deepseek-chat"));
        assert!(!matches_tool_pattern("meta-llama/llama-3-8b"));
    }

    #[test]
    fn explicit_flags_win_without_pattern() {
        let flagged = record(json!({"id": "acme/foo", "supports_function_calling": true}));
        assert!(supports_tools(&flagged, "acme/foo"));

        let unflagged = record(json!({"id": "acme/foo", "supports_tools": false}));
        assert!(!supports_tools(&unflagged, "acme/foo"));
    }

    #[test]
    fn non_boolean_flags_are_ignored() {
        let odd = record(json!({"id": "acme/foo", "supports_tools": "true"}));
        assert!(!has_explicit_tool_flag(&odd));
    }

    #[test]
    fn pattern_list_is_stable() {
        assert_eq!(
            TOOL_CAPABLE_PATTERNS,
            &[
                "gpt-4o",
                "gpt-4-turbo",
                "gpt-4",
                "gpt-3.5-turbo",
                "claude-3",
                "claude-3.5",
                "gemini-1.5",
                "gemini-pro",
                "llama-3.1",
                "llama-3.2",
                "mistral-large",
                "mixtral",
            ]
        );
    }
}
