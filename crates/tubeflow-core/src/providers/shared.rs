//! Provider-agnostic helpers for credential and endpoint resolution.

use anyhow::{Context, Result};

/// Standard User-Agent header for TubeFlow API requests.
pub const USER_AGENT: &str = concat!("tubeflow/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Config resolution helpers
// ============================================================================

/// Resolves an API key with precedence: config > env vars (in order).
///
/// Returns `None` when nothing non-empty is configured; callers decide
/// whether that is fatal.
pub fn resolve_api_key(config_api_key: Option<&str>, env_vars: &[&str]) -> Option<String> {
    // Try config value first
    if let Some(key) = config_api_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    env_vars.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Picks the first non-blank of `env_var` and `config_base_url`, else
/// `default_url`. A chosen URL loses its trailing `/`.
///
/// # Errors
/// Returns an error when the chosen URL does not parse.
pub fn resolve_base_url(
    config_base_url: Option<&str>,
    env_var: &str,
    default_url: &str,
    provider_name: &str,
) -> Result<String> {
    let env_url = std::env::var(env_var).ok();
    let chosen = [env_url.as_deref(), config_base_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty());

    let Some(url) = chosen else {
        return Ok(default_url.to_string());
    };
    url::Url::parse(url).with_context(|| format!("Invalid {provider_name} base URL: {url}"))?;
    Ok(url.trim_end_matches('/').to_string())
}
