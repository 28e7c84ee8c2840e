//! Provider router: selects the LLM provider named in config.

use crate::openai_compat::OpenAiCompatProvider;
use propuestas_core::error::ProviderError;
use propuestas_core::provider::Provider;
use std::collections::HashMap;
use std::sync::Arc;

/// Holds the configured providers, keyed by name.
pub struct ProviderRouter {
    providers: HashMap<String, Arc<dyn Provider>>,
    default_provider: String,
}

impl ProviderRouter {
    /// Create a new router with a default provider.
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn Provider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    pub fn default_name(&self) -> &str {
        &self.default_provider
    }

    /// Get a specific provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    /// List all registered provider names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Build providers from configuration.
///
/// Every `[providers.<name>]` entry becomes an OpenAI-compatible client; the
/// default provider is always present even when it has no explicit entry.
pub fn build_from_config(
    config: &propuestas_config::AppConfig,
) -> Result<ProviderRouter, ProviderError> {
    let mut router = ProviderRouter::new(&config.default_provider);

    for (name, provider_config) in &config.providers {
        let api_key = provider_config
            .api_key
            .clone()
            .or_else(|| config.api_key.clone())
            .unwrap_or_default();

        let base_url = match &provider_config.api_url {
            Some(url) => url.clone(),
            None => default_base_url(name)?,
        };

        let provider = OpenAiCompatProvider::new(name, base_url, api_key)?;
        router.register(name.clone(), Arc::new(provider));
    }

    if router.get(&config.default_provider).is_none() {
        let api_key = config.api_key.clone().unwrap_or_default();
        let base_url = default_base_url(&config.default_provider)?;
        let provider = OpenAiCompatProvider::new(&config.default_provider, base_url, api_key)?;
        router.register(config.default_provider.clone(), Arc::new(provider));
    }

    tracing::debug!(
        default = %config.default_provider,
        providers = ?router.list(),
        "Provider router built"
    );

    Ok(router)
}

/// Model to request from `provider`: its `[providers.*]` override, else the
/// global default.
pub fn model_for(config: &propuestas_config::AppConfig, provider: &str) -> String {
    config
        .providers
        .get(provider)
        .and_then(|p| p.default_model.clone())
        .unwrap_or_else(|| config.default_model.clone())
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> Result<String, ProviderError> {
    let url = match provider_name {
        "openai" => "https://api.openai.com/v1",
        "openrouter" => "https://openrouter.ai/api/v1",
        "ollama" => "http://localhost:11434/v1",
        "groq" => "https://api.groq.com/openai/v1",
        "deepseek" => "https://api.deepseek.com/v1",
        "together" => "https://api.together.xyz/v1",
        "vllm" => "http://localhost:8000/v1",
        other => {
            return Err(ProviderError::NotConfigured(format!(
                "no api_url configured for provider '{other}'"
            )));
        }
    };
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use propuestas_config::{AppConfig, ProviderConfig};

    #[test]
    fn router_register_and_lookup() {
        let mut router = ProviderRouter::new("openai");
        let provider = Arc::new(OpenAiCompatProvider::openai("sk-test").unwrap());
        router.register("openai", provider);

        assert!(router.get("openai").is_some());
        assert!(router.get("nonexistent").is_none());
        assert!(router.default().is_some());
        assert_eq!(router.default_name(), "openai");
    }

    #[test]
    fn default_base_urls() {
        assert!(default_base_url("openrouter").unwrap().contains("openrouter.ai"));
        assert!(default_base_url("openai").unwrap().contains("api.openai.com"));
        assert!(default_base_url("ollama").unwrap().contains("localhost:11434"));
        assert!(default_base_url("desconocido").is_err());
    }

    #[test]
    fn build_from_default_config() {
        let config = AppConfig::default();
        let router = build_from_config(&config).unwrap();
        assert_eq!(router.default().unwrap().name(), "openai");
    }

    #[test]
    fn explicit_provider_entries_are_registered() {
        let mut config = AppConfig {
            default_provider: "local".into(),
            ..AppConfig::default()
        };
        config.providers.insert(
            "local".into(),
            ProviderConfig {
                api_url: Some("http://127.0.0.1:9000/v1".into()),
                default_model: Some("qwen2.5".into()),
                ..ProviderConfig::default()
            },
        );

        let router = build_from_config(&config).unwrap();
        assert_eq!(router.list(), vec!["local"]);
        assert_eq!(model_for(&config, "local"), "qwen2.5");
        assert_eq!(model_for(&config, "openai"), "gpt-4o-mini");
    }

    #[test]
    fn unknown_default_without_url_is_not_configured() {
        let config = AppConfig {
            default_provider: "misterioso".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            build_from_config(&config),
            Err(ProviderError::NotConfigured(_))
        ));
    }
}
