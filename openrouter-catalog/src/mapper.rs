//! Helpers for the `<provider>/<name>` model id convention.

/// Split a full model id into (provider, short_id).
pub fn split_model_id(full_id: &str) -> Option<(&str, &str)> {
    let slash = full_id.find('/')?;
    if slash == 0 || slash == full_id.len() - 1 {
        return None;
    }
    Some((&full_id[..slash], &full_id[slash + 1..]))
}

/// The `"<provider>/"` prefix every id of that provider starts with.
pub fn provider_prefix(provider: &str) -> String {
    format!("{}/", provider)
}
