use crate::config::ProviderConfig;
use crate::providers::{LlmProvider, INGREDIENT_EXTRACTION_PROMPT};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug)]
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Build the provider from configuration. The API key may come from the
    /// config file or the OPENAI_API_KEY environment variable; `base_url`
    /// overrides the public endpoint for proxies and tests.
    pub fn new(config: &ProviderConfig) -> Result<Self, Box<dyn Error>> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or("OPENAI_API_KEY not found in config or environment")?;

        Ok(OpenAIProvider {
            client: Client::new(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn extract_ingredients(&self, request: &str) -> Result<String, Box<dyn Error>> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": INGREDIENT_EXTRACTION_PROMPT},
                {"role": "user", "content": request}
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        });

        let response: Value = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        debug!("{response:?}");

        response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| "No content in OpenAI response".into())
    }
}
