//! Catalog fetching from the OpenRouter `/models` endpoint and provider filtering.

use crate::mapper::provider_prefix;
use crate::sanitize::{sanitize_api_error, scrub_secret};
use crate::types::ModelRecord;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Number of models `fetch_top_models_by_provider` callers usually ask for.
pub const DEFAULT_PROVIDER_LIMIT: usize = 5;

/// Errors from fetching the model catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid models list JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status code if the failure was an HTTP error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if this error is likely an auth/credential problem (401, 403, or 404).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403 | 404))
    }
}

/// `/models` response. A missing or null `data` field means an empty catalog.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Option<Vec<ModelRecord>>,
}

/// Catalog endpoint for a base URL such as `https://openrouter.ai/api/v1`.
pub fn models_url(base_url: &str) -> Result<Url, FetchError> {
    Ok(Url::parse(&format!("{}/models", base_url.trim_end_matches('/')))?)
}

/// GET the catalog with bearer auth. Every failure is returned as a `FetchError`.
pub async fn request_models(
    client: &Client,
    url: Url,
    api_key: &str,
    timeout: Duration,
) -> Result<Vec<ModelRecord>, FetchError> {
    tracing::debug!("Fetching model catalog from {}", url);

    let resp = client
        .get(url)
        .bearer_auth(api_key)
        .timeout(timeout)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(FetchError::Http {
            status: status.as_u16(),
            body: sanitize_api_error(&scrub_secret(&body, api_key)),
        });
    }

    let body = resp.text().await?;
    let models = parse_models_response(&body)?;
    tracing::debug!("Fetched {} models", models.len());
    Ok(models)
}

/// Parse a `/models` response body.
pub fn parse_models_response(body: &str) -> Result<Vec<ModelRecord>, FetchError> {
    let parsed: ModelsResponse = serde_json::from_str(body)?;
    Ok(parsed.data.unwrap_or_default())
}

/// Keep records whose id starts with `"<provider>/"`, in upstream order, at most `limit`.
///
/// Upstream already ranks the catalog by popularity, so no local sort happens.
/// Records without a string id never match.
pub fn filter_by_provider(
    records: impl IntoIterator<Item = ModelRecord>,
    provider: &str,
    limit: usize,
) -> Vec<ModelRecord> {
    let prefix = provider_prefix(provider);
    records
        .into_iter()
        .filter(|record| record.id().is_some_and(|id| id.starts_with(&prefix)))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> ModelRecord {
        ModelRecord::from_value(json!({ "id": id })).unwrap()
    }

    fn catalog() -> Vec<ModelRecord> {
        vec![
            record("openai/gpt-4o"),
            record("anthropic/claude-3.5-sonnet"),
            record("openai/gpt-4o-mini"),
            record("openai-compat/foo"),
            record("openai/o1"),
            ModelRecord::from_value(json!({ "name": "no id" })).unwrap(),
        ]
    }

    fn ids(records: &[ModelRecord]) -> Vec<&str> {
        records.iter().filter_map(ModelRecord::id).collect()
    }

    #[test]
    fn filter_keeps_upstream_order_and_exact_prefix() {
        let top = filter_by_provider(catalog(), "openai", 5);
        assert_eq!(ids(&top), vec!["openai/gpt-4o", "openai/gpt-4o-mini", "openai/o1"]);
    }

    #[test]
    fn filter_truncates_to_limit() {
        let top = filter_by_provider(catalog(), "openai", 2);
        assert_eq!(ids(&top), vec!["openai/gpt-4o", "openai/gpt-4o-mini"]);
        assert!(filter_by_provider(catalog(), "openai", 0).is_empty());
    }

    #[test]
    fn filter_unknown_provider_is_empty() {
        assert!(filter_by_provider(catalog(), "mistralai", 5).is_empty());
        assert!(filter_by_provider(Vec::new(), "openai", 5).is_empty());
    }

    #[test]
    fn filter_results_respect_limit_and_prefix_for_every_provider() {
        for provider in ["openai", "anthropic", "openai-compat", "", "x"] {
            for limit in 0..4 {
                let top = filter_by_provider(catalog(), provider, limit);
                assert!(top.len() <= limit);
                let prefix = format!("{}/", provider);
                assert!(top.iter().all(|r| r.id().unwrap().starts_with(&prefix)));
            }
        }
    }

    #[test]
    fn parse_response_with_data() {
        let body = r#"{"data":[{"id":"openai/gpt-4o","context_length":128000},{"id":"x/y"}]}"#;
        let models = parse_models_response(body).unwrap();
        assert_eq!(ids(&models), vec!["openai/gpt-4o", "x/y"]);
    }

    #[test]
    fn parse_response_without_data_is_empty() {
        assert!(parse_models_response("{}").unwrap().is_empty());
        assert!(parse_models_response(r#"{"data":null}"#).unwrap().is_empty());
    }

    #[test]
    fn parse_response_rejects_garbage() {
        assert!(matches!(parse_models_response("<html>"), Err(FetchError::Json(_))));
        assert!(matches!(
            parse_models_response(r#"{"data":["openai/gpt-4o"]}"#),
            Err(FetchError::Json(_))
        ));
    }

    #[test]
    fn models_url_trims_trailing_slash() {
        assert_eq!(
            models_url("https://openrouter.ai/api/v1/").unwrap().as_str(),
            "https://openrouter.ai/api/v1/models"
        );
        assert!(matches!(models_url("not a url"), Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn fetch_error_is_auth_error() {
        let http = |status| FetchError::Http { status, body: String::new() };
        assert!(http(401).is_auth_error());
        assert!(http(403).is_auth_error());
        assert!(http(404).is_auth_error());
        assert!(!http(500).is_auth_error());
        assert_eq!(http(502).status(), Some(502));
        let json = parse_models_response("nope").unwrap_err();
        assert_eq!(json.status(), None);
        assert!(!json.is_auth_error());
    }
}
