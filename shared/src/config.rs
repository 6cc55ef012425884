use crate::rover_api::DEFAULT_API_BASE_URL;
use std::fmt;

const NASA_API_KEY: &str = "NASA_API_KEY";
const API_KEY: &str = "API_KEY"; // Accepted when NASA_API_KEY is unset
const NASA_API_BASE_URL: &str = "NASA_API_BASE_URL"; // Optional upstream override

/// Process-wide proxy configuration, read once at startup
#[derive(Clone)]
pub struct ProxyConfig {
    api_key: Option<String>,
    api_base_url: String,
}

impl ProxyConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(NASA_API_KEY)
            .filter(|key| !key.is_empty())
            .or_else(|| lookup(API_KEY));

        let config = Self::new(api_key);
        match lookup(NASA_API_BASE_URL).filter(|url| !url.is_empty()) {
            Some(url) => config.with_api_base_url(url),
            None => config,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

// The key must never end up in logs
impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> ProxyConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProxyConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_reads_nasa_api_key() {
        let config = lookup(&[("NASA_API_KEY", "abc"), ("API_KEY", "ignored")]);
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_falls_back_to_api_key() {
        assert_eq!(lookup(&[("API_KEY", "xyz")]).api_key(), Some("xyz"));
        assert_eq!(
            lookup(&[("NASA_API_KEY", ""), ("API_KEY", "xyz")]).api_key(),
            Some("xyz")
        );
    }

    #[test]
    fn test_empty_key_is_missing() {
        assert_eq!(lookup(&[]).api_key(), None);
        assert_eq!(lookup(&[("NASA_API_KEY", "")]).api_key(), None);
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let config = lookup(&[("NASA_API_BASE_URL", "http://localhost:9000/v1/")]);
        assert_eq!(config.api_base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", ProxyConfig::new(Some("super-secret".to_string())));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
