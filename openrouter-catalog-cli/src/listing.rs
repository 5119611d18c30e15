use openrouter_catalog::{DisplayRecord, OpenRouterClient, format_models, split_model_id};
use std::collections::BTreeMap;

/// Format the whole catalog.
pub async fn run_list(client: &OpenRouterClient, tools: bool, json: bool) -> anyhow::Result<()> {
    let models = client.fetch_all_models().await;
    let records = format_models(&models, tools);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No models available.");
        return Ok(());
    }

    for line in render_lines(&records) {
        println!("{}", line);
    }
    let counts = provider_counts(&records);
    println!(
        "\n{} models across {} providers",
        records.len(),
        counts.len()
    );
    Ok(())
}

/// Format the top models of one provider.
pub async fn run_top(
    client: &OpenRouterClient,
    provider: &str,
    limit: usize,
    tools: bool,
    json: bool,
) -> anyhow::Result<()> {
    let models = client.fetch_top_models_by_provider(provider, limit).await;
    let records = format_models(&models, tools);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No models found for provider: {}", provider);
        return Ok(());
    }

    for line in render_lines(&records) {
        println!("{}", line);
    }
    Ok(())
}

pub fn print_headers(client: &OpenRouterClient) {
    let headers = client.extra_headers();
    if headers.is_empty() {
        println!("No attribution headers configured (set --site-url / --site-name).");
        return;
    }
    for (name, value) in headers {
        println!("{}: {}", name, value);
    }
}

/// `"<display>  [<id>]"`, one per record.
fn render_lines(records: &[DisplayRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| format!("{}  [{}]", r.display, r.id))
        .collect()
}

/// Model count per provider prefix. Ids without a provider are counted under `""`.
fn provider_counts(records: &[DisplayRecord]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let provider = split_model_id(&record.id).map(|(p, _)| p).unwrap_or("");
        *counts.entry(provider).or_insert(0) += 1;
    }
    counts
}
