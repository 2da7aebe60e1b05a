//! Turns free-form cooking input into a structured per-serving ingredient
//! list by way of an LLM provider.

use log::info;
use serde::Deserialize;
use std::error::Error;

use crate::model::Ingredient;
use crate::providers::LlmProvider;

/// Structured result of an ingredient extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeExtraction {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
}

/// Extract the ingredient list needed to cook a named dish.
pub async fn extract_from_dish_name(
    provider: &dyn LlmProvider,
    dish: &str,
) -> Result<RecipeExtraction, Box<dyn Error>> {
    let request = format!("Dish name: {dish}");
    let raw = provider.extract_ingredients(&request).await?;
    parse_extraction(&raw)
}

/// Extract the ingredient list from a full recipe text, e.g. a cooking-video
/// transcript or description.
pub async fn extract_from_recipe_text(
    provider: &dyn LlmProvider,
    text: &str,
) -> Result<RecipeExtraction, Box<dyn Error>> {
    let request = format!("Recipe text:\n{text}");
    let raw = provider.extract_ingredients(&request).await?;
    parse_extraction(&raw)
}

fn parse_extraction(raw: &str) -> Result<RecipeExtraction, Box<dyn Error>> {
    let extraction: RecipeExtraction = serde_json::from_str(strip_code_fences(raw))?;

    if extraction.ingredients.is_empty() {
        return Err("Extraction returned no ingredients".into());
    }

    info!(
        "Extracted {} ingredients for '{}'",
        extraction.ingredients.len(),
        extraction.title
    );
    Ok(extraction)
}

// Models sometimes wrap the JSON answer in a markdown code fence despite the
// prompt.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
