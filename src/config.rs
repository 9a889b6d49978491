//! Text generation settings, read from the environment.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Without a key every generation call fails and hints use the fallback
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: get("ECOQUEST_GEMINI_API_KEY").or_else(|| get("GEMINI_API_KEY")),
            model: get("ECOQUEST_GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: get("ECOQUEST_GEMINI_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_secs: get("ECOQUEST_HINT_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GeneratorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GeneratorConfig::default());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_prefixed_key_wins() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "generic"),
            ("ECOQUEST_GEMINI_API_KEY", "specific"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("specific"));

        let config = GeneratorConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "generic")]));
        assert_eq!(config.api_key.as_deref(), Some("generic"));
    }

    #[test]
    fn test_overrides_and_bad_timeout() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("ECOQUEST_GEMINI_API_KEY", "  "),
            ("ECOQUEST_GEMINI_MODEL", "gemini-pro"),
            ("ECOQUEST_HINT_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config =
            GeneratorConfig::from_lookup(lookup(&[("ECOQUEST_HINT_TIMEOUT_SECS", " 3 ")]));
        assert_eq!(config.timeout_secs, 3);
    }
}
