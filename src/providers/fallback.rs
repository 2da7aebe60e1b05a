use crate::config::AppConfig;
use crate::providers::{LlmProvider, ProviderFactory};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;

/// Runs extraction requests across a chain of providers, retrying each with a
/// growing backoff before moving on to the next one.
#[derive(Debug)]
pub struct FallbackProvider {
    chain: Vec<Box<dyn LlmProvider>>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl FallbackProvider {
    /// Build the provider chain from configuration.
    ///
    /// With fallback disabled the chain holds just the default provider and a
    /// single attempt. Providers named in the fallback order that are missing,
    /// disabled or fail to initialize are skipped with a warning; an entirely
    /// empty chain is an error.
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        if !config.fallback.enabled {
            return Ok(FallbackProvider {
                chain: vec![ProviderFactory::get_default_provider(config)?],
                retry_attempts: 1,
                retry_delay_ms: 0,
            });
        }

        let mut chain: Vec<Box<dyn LlmProvider>> = Vec::new();
        for name in &config.fallback.order {
            let Some(provider_config) = config.providers.get(name) else {
                warn!("Provider '{name}' in fallback order not found in configuration");
                continue;
            };
            if !provider_config.enabled {
                continue;
            }
            match ProviderFactory::create(name, provider_config) {
                Ok(provider) => {
                    info!("Added '{name}' to fallback chain");
                    chain.push(provider);
                }
                Err(e) => warn!("Failed to initialize provider '{name}': {e}"),
            }
        }

        if chain.is_empty() {
            return Err("No providers available in fallback configuration".into());
        }

        Ok(FallbackProvider {
            chain,
            retry_attempts: config.fallback.retry_attempts,
            retry_delay_ms: config.fallback.retry_delay_ms,
        })
    }

    async fn run_with_retry(
        &self,
        provider: &dyn LlmProvider,
        request: &str,
    ) -> Result<String, String> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry_attempts {
            debug!(
                "Extraction attempt {attempt}/{} with {}",
                self.retry_attempts,
                provider.provider_name()
            );

            // The boxed error is not Send and must be flattened to a string
            // before the sleep below.
            match provider.extract_ingredients(request).await {
                Ok(result) => {
                    info!("{} extracted the ingredient list", provider.provider_name());
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        "Provider {} failed (attempt {attempt}/{}): {e}",
                        provider.provider_name(),
                        self.retry_attempts
                    );
                    last_error = e.to_string();
                }
            }

            if attempt < self.retry_attempts {
                let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
                debug!("Waiting {delay:?} before retry");
                sleep(delay).await;
            }
        }

        Err(last_error)
    }
}

#[async_trait]
impl LlmProvider for FallbackProvider {
    fn provider_name(&self) -> &str {
        "fallback"
    }

    async fn extract_ingredients(&self, request: &str) -> Result<String, Box<dyn Error>> {
        let mut failures: Vec<String> = Vec::new();

        for provider in &self.chain {
            match self.run_with_retry(provider.as_ref(), request).await {
                Ok(result) => return Ok(result),
                Err(e) => failures.push(format!("{}: {e}", provider.provider_name())),
            }
        }

        Err(format!("All providers failed:\n{}", failures.join("\n")).into())
    }
}
