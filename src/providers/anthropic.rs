use crate::config::ProviderConfig;
use crate::providers::{LlmProvider, INGREDIENT_EXTRACTION_PROMPT};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Build the provider from configuration. The API key may come from the
    /// config file or the ANTHROPIC_API_KEY environment variable; `base_url`
    /// overrides the public endpoint for proxies and tests.
    pub fn new(config: &ProviderConfig) -> Result<Self, Box<dyn Error>> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or("ANTHROPIC_API_KEY not found in config or environment")?;

        Ok(AnthropicProvider {
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
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn extract_ingredients(&self, request: &str) -> Result<String, Box<dyn Error>> {
        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": INGREDIENT_EXTRACTION_PROMPT,
            "messages": [
                {"role": "user", "content": request}
            ]
        });

        let response: Value = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        debug!("{response:?}");

        response
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| "No content in Anthropic response".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn config_against(url: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "claude-3-5-sonnet-20241022".to_string(),
            temperature: 0.2,
            max_tokens: 1000,
            api_key: Some("fake-key".to_string()),
            base_url: url.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_extract_ingredients() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "content": [{
                        "type": "text",
                        "text": "{\"title\": \"김치찌개\", \"ingredients\": [{\"name\": \"돼지고기\", \"amount\": \"150\", \"unit\": \"g\"}]}"
                    }]
                }"#,
            )
            .create();

        let provider = AnthropicProvider::new(&config_against(Some(&server.url()))).unwrap();
        let result = provider
            .extract_ingredients("Dish name: 김치찌개")
            .await
            .unwrap();

        assert!(result.contains("돼지고기"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_defaults_to_public_endpoint() {
        let provider = AnthropicProvider::new(&config_against(None)).unwrap();
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.provider_name(), "anthropic");
    }
}
