//! Connection settings: command-line flags, falling back to environment variables.

use clap::Args;
use openrouter_catalog::OpenRouterClient;

#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// OpenRouter API key
    #[arg(long, global = true, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Site URL sent as HTTP-Referer for attribution
    #[arg(long, global = true, env = "OPENROUTER_SITE_URL")]
    pub site_url: Option<String>,

    /// Site name sent as X-Title for attribution
    #[arg(long, global = true, env = "OPENROUTER_SITE_NAME")]
    pub site_name: Option<String>,

    /// API root, for gateways that mirror OpenRouter
    #[arg(long, global = true, env = "OPENROUTER_BASE_URL")]
    pub base_url: Option<String>,
}

impl ConnectionArgs {
    pub fn build_client(&self) -> anyhow::Result<OpenRouterClient> {
        let api_key = match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => anyhow::bail!("No API key: pass --api-key or set OPENROUTER_API_KEY"),
        };

        let client = self.configure(OpenRouterClient::new(api_key));
        tracing::debug!("Using catalog endpoint {}", client.base_url());
        Ok(client)
    }

    /// Client for local-only operations (attribution headers); the API key is optional.
    pub fn attribution_client(&self) -> OpenRouterClient {
        let api_key = self.api_key.as_deref().unwrap_or_default().trim();
        self.configure(OpenRouterClient::new(api_key))
    }

    fn configure(&self, mut client: OpenRouterClient) -> OpenRouterClient {
        if let Some(url) = &self.site_url {
            client = client.with_site_url(url.as_str());
        }
        if let Some(name) = &self.site_name {
            client = client.with_site_name(name.as_str());
        }
        if let Some(base) = self.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
            client = client.with_base_url(base.trim());
        }
        client
    }
}
