//! Display formatting for catalog records.
//!
//! Upstream metadata is inconsistent, so every derived field falls back to a fixed
//! value instead of failing. Only a missing `id` is an error.

use super::tool_support::{TOOL_INDICATOR, supports_tools};
use crate::types::ModelRecord;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Upstream prices are per token; display is per million tokens.
const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

const UNKNOWN_NAME: &str = "Unknown";

/// Errors from formatting a record that lacks required data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("model record is missing required key `{0}`")]
    MissingKey(&'static str),

    #[error("model record key `{0}` is not a string")]
    NotAString(&'static str),
}

/// Prompt/completion pricing, in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pricing {
    PerMillion { prompt: f64, completion: f64 },
    Unavailable,
}

impl Pricing {
    /// Read `pricing.prompt` and `pricing.completion`. Both must convert or the
    /// result is `Unavailable`.
    pub fn from_record(record: &ModelRecord) -> Self {
        let Some(Value::Object(pricing)) = record.get("pricing") else {
            return Pricing::Unavailable;
        };
        match (
            price_per_token(pricing.get("prompt")),
            price_per_token(pricing.get("completion")),
        ) {
            (Some(prompt), Some(completion)) => {
                let prompt = prompt * TOKENS_PER_PRICE_UNIT;
                let completion = completion * TOKENS_PER_PRICE_UNIT;
                if prompt.is_finite() && completion.is_finite() {
                    Pricing::PerMillion { prompt, completion }
                } else {
                    Pricing::Unavailable
                }
            }
            _ => Pricing::Unavailable,
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pricing::PerMillion { prompt, completion } => {
                write!(f, "${:.2}/${:.2} per 1M", prompt, completion)
            }
            Pricing::Unavailable => f.write_str("Pricing unavailable"),
        }
    }
}

/// Numbers and numeric strings are accepted; anything non-finite is not a price.
fn price_per_token(value: Option<&Value>) -> Option<f64> {
    let price = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    price.is_finite().then_some(price)
}

/// Context window size in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextLength {
    Tokens(u64),
    Unknown,
}

impl ContextLength {
    /// A positive JSON number becomes `Tokens` (fraction truncated); anything else is `Unknown`.
    pub fn from_record(record: &ModelRecord) -> Self {
        let Some(Value::Number(n)) = record.get("context_length") else {
            return ContextLength::Unknown;
        };
        if let Some(tokens) = n.as_u64() {
            return if tokens > 0 {
                ContextLength::Tokens(tokens)
            } else {
                ContextLength::Unknown
            };
        }
        match n.as_f64() {
            Some(f) if f.is_finite() && f > 0.0 && f < u64::MAX as f64 => {
                ContextLength::Tokens(f.trunc() as u64)
            }
            _ => ContextLength::Unknown,
        }
    }
}

impl fmt::Display for ContextLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextLength::Tokens(n) => write!(f, "{} ctx", group_thousands(*n)),
            ContextLength::Unknown => f.write_str("Unknown ctx"),
        }
    }
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Display-ready view of one catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    /// `"<indicator><name> | <pricing> | <context>"`.
    pub display: String,
    pub id: String,
    pub name: String,
    pub description: String,
    /// Raw upstream `pricing` object (`{}` when absent).
    pub pricing: Value,
    /// Raw upstream `context_length`.
    pub context_length: Option<Value>,
    /// `None` unless the tool indicator was requested.
    pub supports_tools: Option<bool>,
}

/// Format one record for display.
///
/// With `include_tool_indicator`, the tool capability is detected and tool-capable
/// models get [`TOOL_INDICATOR`] in front of their name.
pub fn format_model_display(
    model: &ModelRecord,
    include_tool_indicator: bool,
) -> Result<DisplayRecord, FormatError> {
    let name = model
        .get_str("name")
        .or_else(|| model.id())
        .unwrap_or(UNKNOWN_NAME);
    let id = match model.get("id") {
        Some(Value::String(id)) => id.as_str(),
        Some(_) => return Err(FormatError::NotAString("id")),
        None => return Err(FormatError::MissingKey("id")),
    };

    let supports = include_tool_indicator.then(|| supports_tools(model, id));
    let indicator = if supports == Some(true) {
        TOOL_INDICATOR
    } else {
        ""
    };

    let pricing = Pricing::from_record(model);
    let context = ContextLength::from_record(model);

    Ok(DisplayRecord {
        display: format!("{}{} | {} | {}", indicator, name, pricing, context),
        id: id.to_string(),
        name: name.to_string(),
        description: model.get_str("description").unwrap_or_default().to_string(),
        pricing: model
            .get("pricing")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())),
        context_length: model.get("context_length").cloned(),
        supports_tools: supports,
    })
}

/// Format a batch, skipping (and logging) records that cannot be formatted.
pub fn format_models(models: &[ModelRecord], include_tool_indicator: bool) -> Vec<DisplayRecord> {
    models
        .iter()
        .filter_map(
            |model| match format_model_display(model, include_tool_indicator) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!("Skipping catalog record: {}", e);
                    None
                }
            },
        )
        .collect()
}
