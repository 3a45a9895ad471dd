// Embedding endpoint configuration

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "nomic-embed-text";

pub const BASE_URL_ENV: &str = "CODEMETA_EMBED_URL";
pub const MODEL_ENV: &str = "CODEMETA_EMBED_MODEL";

/// Where to send embedding requests and which model to ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingConfig {
    /// Root of an Ollama-compatible server; `/api/embed` is appended
    pub base_url: String,
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl EmbeddingConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Defaults overlaid with `CODEMETA_EMBED_URL` and `CODEMETA_EMBED_MODEL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        config
    }

    /// Full URL of the embed endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/api/embed", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EmbeddingConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "nomic-embed-text");
        assert_eq!(config.endpoint(), "http://localhost:11434/api/embed");
    }

    #[test]
    fn test_endpoint_trims_trailing_slashes() {
        let config = EmbeddingConfig::new("http://embed.local:8080//", "m");
        assert_eq!(config.endpoint(), "http://embed.local:8080/api/embed");
    }

    #[test]
    fn test_environment_overlay() {
        let config = EmbeddingConfig::from_lookup(|key| match key {
            BASE_URL_ENV => Some("http://gpu-box:11434".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://gpu-box:11434");
        assert_eq!(config.model, DEFAULT_MODEL);

        let config = EmbeddingConfig::from_lookup(|key| match key {
            MODEL_ENV => Some("mxbai-embed-large".to_string()),
            BASE_URL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "mxbai-embed-large");
    }
}
