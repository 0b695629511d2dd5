use anyhow::{Result, bail};

use crate::deepl::{FREE_API_ENDPOINT, PRO_API_ENDPOINT};

/// Environment variable holding the DeepL authentication key.
pub const AUTH_KEY_ENV: &str = "DEEPL_AUTH_KEY";

/// Raw settings as given on the command line (or through their env vars).
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub auth_key: Option<String>,
    pub endpoint: Option<String>,
    pub glossary_id: Option<String>,
}

/// Settings the translator runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The DeepL authentication key.
    pub auth_key: String,
    /// Base URL of the DeepL API.
    pub endpoint: String,
    /// Glossary applied to document translations.
    pub glossary_id: Option<String>,
}

/// Picks the API host matching the key's plan.
///
/// DeepL API Free keys carry a `:fx` suffix.
pub fn default_endpoint(auth_key: &str) -> &'static str {
    if auth_key.ends_with(":fx") {
        FREE_API_ENDPOINT
    } else {
        PRO_API_ENDPOINT
    }
}

/// Validates the options and fills in defaults.
///
/// # Errors
///
/// Returns an error if no authentication key was provided.
pub fn resolve_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let Some(auth_key) = non_empty(options.auth_key.as_deref()) else {
        bail!(
            "Missing required configuration: 'auth key'\n\n\
             Please provide it via:\n  \
             - Environment: export {AUTH_KEY_ENV}=\"your-auth-key\"\n  \
             - CLI option: dlt --auth-key <key>"
        );
    };

    let endpoint = non_empty(options.endpoint.as_deref())
        .map_or_else(|| default_endpoint(auth_key).to_string(), str::to_string);

    Ok(ResolvedConfig {
        auth_key: auth_key.to_string(),
        endpoint,
        glossary_id: non_empty(options.glossary_id.as_deref()).map(str::to_string),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn options_with_key(key: &str) -> ResolveOptions {
        ResolveOptions {
            auth_key: Some(key.to_string()),
            ..ResolveOptions::default()
        }
    }

    #[test]
    fn test_free_key_uses_free_host() {
        let options = options_with_key("279a2e9d-83b3-c416-7e2d-f721593e42a0:fx");
        let resolved = resolve_config(&options).unwrap();
        assert_eq!(resolved.endpoint, FREE_API_ENDPOINT);
    }

    #[test]
    fn test_pro_key_uses_pro_host() {
        let options = options_with_key("279a2e9d-83b3-c416-7e2d-f721593e42a0");
        let resolved = resolve_config(&options).unwrap();
        assert_eq!(resolved.endpoint, PRO_API_ENDPOINT);
    }

    #[test]
    fn test_endpoint_override_wins() {
        let options = ResolveOptions {
            endpoint: Some("http://127.0.0.1:8080".to_string()),
            ..options_with_key("key:fx")
        };
        let resolved = resolve_config(&options).unwrap();
        assert_eq!(resolved.endpoint, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_key_is_trimmed() {
        let resolved = resolve_config(&options_with_key("  key:fx\n")).unwrap();
        assert_eq!(resolved.auth_key, "key:fx");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = resolve_config(&ResolveOptions::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(AUTH_KEY_ENV));
    }

    #[test]
    fn test_blank_key_is_an_error() {
        assert!(resolve_config(&options_with_key("   ")).is_err());
    }

    #[test]
    fn test_blank_glossary_is_dropped() {
        let options = ResolveOptions {
            glossary_id: Some(String::new()),
            ..options_with_key("key")
        };
        assert_eq!(resolve_config(&options).unwrap().glossary_id, None);
    }
}
