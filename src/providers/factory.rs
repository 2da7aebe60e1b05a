use crate::config::{AppConfig, ProviderConfig};
use crate::providers::{AnthropicProvider, LlmProvider, OpenAIProvider};
use std::error::Error;

/// Builds provider instances from their configuration names.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Instantiate a provider by name.
    ///
    /// A disabled provider is refused here, so callers assembling a chain
    /// never have to check the flag themselves.
    pub fn create(
        name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, Box<dyn Error>> {
        if !config.enabled {
            return Err(format!("Provider '{name}' is not enabled in configuration").into());
        }

        match name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config)?)),
            _ => Err(format!("Unknown provider: {name}").into()),
        }
    }

    /// Instantiate whichever provider the configuration names as default.
    pub fn get_default_provider(
        config: &AppConfig,
    ) -> Result<Box<dyn LlmProvider>, Box<dyn Error>> {
        let name = &config.default_provider;
        let provider_config = config
            .providers
            .get(name)
            .ok_or_else(|| format!("Default provider '{name}' not found in configuration"))?;
        Self::create(name, provider_config)
    }

    /// The provider names `create` understands.
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn provider_config() -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            api_key: Some("test-key".to_string()),
            base_url: None,
        }
    }

    #[test]
    fn test_creates_every_advertised_provider() {
        let config = provider_config();
        for name in ProviderFactory::available_providers() {
            let provider = ProviderFactory::create(name, &config).unwrap();
            assert_eq!(provider.provider_name(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_refused() {
        let result = ProviderFactory::create("cohere", &provider_config());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown provider"));
    }

    #[test]
    fn test_disabled_provider_is_refused() {
        let mut config = provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("openai", &config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not enabled"));
    }

    #[test]
    fn test_default_provider_lookup() {
        let mut providers = HashMap::new();
        providers.insert("anthropic".to_string(), provider_config());

        let config = AppConfig {
            default_provider: "anthropic".to_string(),
            providers,
            fallback: Default::default(),
            scrape: Default::default(),
            matching: Default::default(),
        };

        let provider = ProviderFactory::get_default_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_default_provider_must_be_configured() {
        let config = AppConfig {
            default_provider: "anthropic".to_string(),
            providers: HashMap::new(),
            fallback: Default::default(),
            scrape: Default::default(),
            matching: Default::default(),
        };

        let result = ProviderFactory::get_default_provider(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
