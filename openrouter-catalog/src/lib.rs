pub mod client;
pub mod mapper;
pub mod models;
pub mod sanitize;
pub mod types;

// Re-exports for convenience
pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenRouterClient};
pub use mapper::{provider_prefix, split_model_id};
pub use models::{
    ContextLength, DEFAULT_PROVIDER_LIMIT, DisplayRecord, FetchError, FormatError, Pricing,
    TOOL_CAPABLE_PATTERNS, TOOL_INDICATOR, format_model_display, format_models,
};
pub use types::ModelRecord;
