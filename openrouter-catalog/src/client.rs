use crate::models::fetch::{self, FetchError};
use crate::sanitize::scrub_secret;
use crate::types::ModelRecord;
use reqwest::{Client, RequestBuilder};
use std::fmt;
use std::time::Duration;

/// OpenRouter API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Per-request timeout for catalog fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Attribution header carrying the caller's site URL.
pub const REFERER_HEADER: &str = "HTTP-Referer";

/// Attribution header carrying the caller's site name.
pub const TITLE_HEADER: &str = "X-Title";

/// Client for the OpenRouter model catalog.
///
/// Configuration is fixed at construction; every call is independent, so the client
/// can be cloned freely and shared across tasks.
#[derive(Clone)]
pub struct OpenRouterClient {
    api_key: String,
    site_url: Option<String>,
    site_name: Option<String>,
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            site_url: None,
            site_name: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Site URL sent as `HTTP-Referer` by [`Self::extra_headers`].
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = Some(site_url.into());
        self
    }

    /// Site name sent as `X-Title` by [`Self::extra_headers`].
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    /// Point the client at another API root (gateway, mock server).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the full catalog, surfacing any failure.
    pub async fn try_fetch_all_models(&self) -> Result<Vec<ModelRecord>, FetchError> {
        let url = fetch::models_url(&self.base_url)?;
        fetch::request_models(&self.http, url, &self.api_key, self.timeout).await
    }

    /// Fetch the full catalog, best effort.
    ///
    /// Failures are logged and yield an empty list, so an empty result may mean
    /// either "no models" or "fetch failed". Use [`Self::try_fetch_all_models`]
    /// to tell them apart.
    pub async fn fetch_all_models(&self) -> Vec<ModelRecord> {
        match self.try_fetch_all_models().await {
            Ok(models) => models,
            Err(e) => {
                tracing::warn!(
                    "Error fetching OpenRouter models: {}",
                    scrub_secret(&e.to_string(), &self.api_key)
                );
                Vec::new()
            }
        }
    }

    /// Top `limit` models of `provider`, in upstream (popularity) order.
    pub async fn fetch_top_models_by_provider(
        &self,
        provider: &str,
        limit: usize,
    ) -> Vec<ModelRecord> {
        let all = self.fetch_all_models().await;
        fetch::filter_by_provider(all, provider, limit)
    }

    /// Attribution headers for other requests to OpenRouter (e.g. completions).
    /// Unset or empty fields are omitted.
    pub fn extra_headers(&self) -> Vec<(&'static str, String)> {
        [
            (REFERER_HEADER, self.site_url.as_deref()),
            (TITLE_HEADER, self.site_name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| match value {
            Some(v) if !v.is_empty() => Some((name, v.to_string())),
            _ => None,
        })
        .collect()
    }

    /// Attach [`Self::extra_headers`] to a request.
    pub fn apply_extra_headers(&self, req: RequestBuilder) -> RequestBuilder {
        self.extra_headers()
            .into_iter()
            .fold(req, |req, (name, value)| req.header(name, value))
    }
}

impl fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("api_key", &"[REDACTED]")
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
