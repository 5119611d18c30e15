use openrouter_catalog::{OpenRouterClient, split_model_id};
use std::collections::BTreeSet;

/// Fetch the catalog once and report whether the key and endpoint work.
pub async fn run_check(client: &OpenRouterClient) -> anyhow::Result<()> {
    println!("📋 Checking {}...", client.base_url());

    match client.try_fetch_all_models().await {
        Ok(models) => {
            let providers: BTreeSet<&str> = models
                .iter()
                .filter_map(|m| m.id())
                .filter_map(|id| split_model_id(id).map(|(p, _)| p))
                .collect();
            println!(
                "  Catalog:    ✅ {} models from {} providers",
                models.len(),
                providers.len()
            );
            if models.is_empty() {
                println!("  Catalog:    ⚠️  Endpoint answered with an empty catalog");
            }
            let headers = client.extra_headers();
            if headers.is_empty() {
                println!("  Attribution: ℹ️  Not configured");
            } else {
                println!("  Attribution: ✅ {} header(s)", headers.len());
            }
            println!("\nCheck complete.");
            Ok(())
        }
        Err(e) => {
            println!("  Catalog:    ❌ {}", e);
            if e.is_auth_error() {
                println!("  Hint: the API key was rejected; check OPENROUTER_API_KEY.");
            }
            anyhow::bail!("catalog check failed")
        }
    }
}
