//! Sanitize upstream error text before it reaches logs or error values:
//! scrub secret-like tokens and truncate length.

const MAX_API_ERROR_CHARS: usize = 200;

const SECRET_PREFIXES: [&str; 4] = ["sk-or-", "sk-", "xoxb-", "xoxp-"];

const REDACTED: &str = "[REDACTED]";

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}

fn token_end(input: &str, from: usize) -> usize {
    let mut end = from;
    for (i, c) in input[from..].char_indices() {
        if is_secret_char(c) {
            end = from + i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

/// Redact tokens starting with a known key prefix (`sk-or-`, `sk-`, `xoxb-`, `xoxp-`).
pub fn scrub_secret_patterns(input: &str) -> String {
    let mut scrubbed = input.to_string();

    for prefix in SECRET_PREFIXES {
        let mut search_from = 0;
        loop {
            let Some(rel) = scrubbed[search_from..].find(prefix) else {
                break;
            };

            let start = search_from + rel;
            let content_start = start + prefix.len();
            let end = token_end(&scrubbed, content_start);

            // Bare prefixes like "sk-" should not stop future scans.
            if end == content_start {
                search_from = content_start;
                continue;
            }

            scrubbed.replace_range(start..end, REDACTED);
            search_from = start + REDACTED.len();
        }
    }

    scrubbed
}

/// Redact every literal occurrence of `secret`. Empty secrets are ignored.
pub fn scrub_secret(input: &str, secret: &str) -> String {
    if secret.is_empty() {
        return input.to_string();
    }
    input.replace(secret, REDACTED)
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        Some((end, _)) => format!("{}...", &scrubbed[..end]),
        None => scrubbed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrubs_openrouter_keys() {
        let out = scrub_secret_patterns("invalid key sk-or-v1-abc123 supplied");
        assert_eq!(out, "invalid key [REDACTED] supplied");
    }

    #[test]
    fn bare_prefix_is_left_alone() {
        assert_eq!(scrub_secret_patterns("prefix sk- only"), "prefix sk- only");
    }

    #[test]
    fn scrub_secret_replaces_literal_key() {
        assert_eq!(
            scrub_secret("Bearer my-key rejected", "my-key"),
            "Bearer [REDACTED] rejected"
        );
        assert_eq!(scrub_secret("unchanged", ""), "unchanged");
    }

    #[test]
    fn long_bodies_keep_first_200_chars() {
        let out = sanitize_api_error(&"é".repeat(300));
        let kept = out.strip_suffix("...").unwrap();
        assert_eq!(kept.chars().count(), MAX_API_ERROR_CHARS);
        assert!(kept.chars().all(|c| c == 'é'));
    }

    #[test]
    fn bodies_at_the_limit_are_untouched() {
        let body = "é".repeat(MAX_API_ERROR_CHARS);
        assert_eq!(sanitize_api_error(&body), body);
        assert_eq!(sanitize_api_error("short"), "short");
    }
}
