mod anthropic;
mod factory;
mod fallback;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::INGREDIENT_EXTRACTION_PROMPT;

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Ask the model for the ingredient list of a dish or recipe text.
    ///
    /// Returns the raw model output, expected to be the extraction JSON.
    async fn extract_ingredients(&self, request: &str) -> Result<String, Box<dyn Error>>;
}
