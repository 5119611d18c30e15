pub mod display;
pub mod fetch;
pub mod tool_support;

pub use display::{
    ContextLength, DisplayRecord, FormatError, Pricing, format_model_display, format_models,
};
pub use fetch::{DEFAULT_PROVIDER_LIMIT, FetchError, filter_by_provider, parse_models_response};
pub use tool_support::{TOOL_CAPABLE_PATTERNS, TOOL_INDICATOR};
