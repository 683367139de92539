use std::env;

use webdev_catalog::FALLBACK_PROVIDER;

/// Environment variable selecting the deployment provider used when a request names none.
pub const DEFAULT_PROVIDER_ENV: &str = "FULLSTACK_WEBDEV_DEFAULT_PROVIDER";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Used verbatim (not normalized).
    pub default_provider: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_provider: FALLBACK_PROVIDER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_provider = lookup(DEFAULT_PROVIDER_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_PROVIDER.to_string());
        Self { default_provider }
    }
}
