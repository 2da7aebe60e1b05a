use async_trait::async_trait;
use std::error::Error;

use grocery_match::extractors::{extract_from_dish_name, extract_from_recipe_text};
use grocery_match::providers::LlmProvider;

/// Provider that replays a canned model response.
#[derive(Debug)]
struct CannedProvider {
    body: String,
}

#[async_trait]
impl LlmProvider for CannedProvider {
    fn provider_name(&self) -> &str {
        "canned"
    }

    async fn extract_ingredients(&self, _request: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.body.clone())
    }
}

/// Provider that always fails, standing in for an unreachable API.
#[derive(Debug)]
struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn provider_name(&self) -> &str {
        "failing"
    }

    async fn extract_ingredients(&self, _request: &str) -> Result<String, Box<dyn Error>> {
        Err("connection reset".into())
    }
}

const KIMCHI_STEW: &str = r#"{
    "title": "김치찌개",
    "ingredients": [
        {"name": "김치", "amount": "300", "unit": "g"},
        {"name": "돼지고기", "amount": "150", "unit": "g"},
        {"name": "두부", "amount": "150", "unit": "g"},
        {"name": "대파", "amount": "20", "unit": "g"}
    ]
}"#;

#[tokio::test]
async fn test_extract_from_dish_name() {
    let provider = CannedProvider {
        body: KIMCHI_STEW.to_string(),
    };

    let extraction = extract_from_dish_name(&provider, "김치찌개").await.unwrap();
    assert_eq!(extraction.title, "김치찌개");
    assert_eq!(extraction.ingredients.len(), 4);

    let pork = &extraction.ingredients[1];
    assert_eq!(pork.name, "돼지고기");
    assert_eq!(pork.parsed_amount().unwrap(), 150.0);
    assert_eq!(
        pork.target_unit().unwrap(),
        grocery_match::TargetUnit::Gram
    );
}

#[tokio::test]
async fn test_extract_handles_fenced_response() {
    let provider = CannedProvider {
        body: format!("```json\n{KIMCHI_STEW}\n```"),
    };

    let extraction = extract_from_recipe_text(&provider, "김치찌개 끓이는 법...")
        .await
        .unwrap();
    assert_eq!(extraction.ingredients.len(), 4);
}

#[tokio::test]
async fn test_extract_rejects_non_json_response() {
    let provider = CannedProvider {
        body: "죄송하지만 레시피를 찾을 수 없습니다.".to_string(),
    };

    let result = extract_from_dish_name(&provider, "???").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_extract_propagates_provider_failure() {
    let result = extract_from_dish_name(&FailingProvider, "김치찌개").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("connection reset"));
}
