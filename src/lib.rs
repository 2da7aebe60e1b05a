pub mod config;
pub mod error;
pub mod extractors;
pub mod matching;
pub mod model;
pub mod providers;
pub mod scrapers;

use log::{info, warn};

pub use crate::config::{AppConfig, MatchingConfig};
pub use crate::error::MatchError;
pub use crate::extractors::RecipeExtraction;
pub use crate::matching::{parse_calories, parse_quantity, score_match, select_best_match};
pub use crate::model::{
    CartPlan, Ingredient, IngredientMatch, Platform, Product, RankingMode, TargetUnit,
};

use crate::providers::LlmProvider;

/// Search every marketplace for an ingredient name and pool the raw listings.
pub async fn search_products(config: &AppConfig, query: &str) -> Result<Vec<Product>, MatchError> {
    let client = scrapers::build_client(&config.scrape)?;
    Ok(scrapers::search_all_platforms(&client, query).await)
}

/// Find the best product for one ingredient: a concurrent three-way search,
/// then the pure selection pass over whatever came back.
pub async fn match_ingredient(
    config: &AppConfig,
    ingredient: &Ingredient,
    ranking: RankingMode,
) -> Result<Option<Product>, MatchError> {
    let amount = ingredient.parsed_amount()?;
    let unit = ingredient.target_unit()?;

    let candidates = search_products(config, &ingredient.name).await?;
    Ok(matching::select_best_match_with(
        &config.matching,
        &candidates,
        amount,
        unit,
        ranking,
        Some(&ingredient.name),
    ))
}

/// Match every ingredient of a recipe, one concurrent flow per ingredient.
///
/// A flow that fails (scrape error, unparseable amount, unsupported unit)
/// yields a `None` product for that ingredient only; the other flows are
/// unaffected.
pub async fn match_all_ingredients(
    config: &AppConfig,
    ingredients: &[Ingredient],
    ranking: RankingMode,
) -> Vec<IngredientMatch> {
    let mut handles = Vec::with_capacity(ingredients.len());
    for ingredient in ingredients {
        let config = config.clone();
        let ingredient = ingredient.clone();
        handles.push(tokio::spawn(async move {
            let product = match match_ingredient(&config, &ingredient, ranking).await {
                Ok(product) => product,
                Err(e) => {
                    warn!("Match failed for '{}': {e}", ingredient.name);
                    None
                }
            };
            IngredientMatch {
                ingredient,
                product,
            }
        }));
    }

    let mut items = Vec::with_capacity(handles.len());
    for (ingredient, handle) in ingredients.iter().cloned().zip(handles) {
        match handle.await {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!("Match task for '{}' aborted: {e}", ingredient.name);
                items.push(IngredientMatch {
                    ingredient,
                    product: None,
                });
            }
        }
    }
    items
}

/// Full flow: dish name → LLM ingredient extraction → best product per
/// ingredient.
pub async fn plan_cart(
    config: &AppConfig,
    provider: &dyn LlmProvider,
    dish: &str,
    ranking: RankingMode,
) -> Result<CartPlan, MatchError> {
    let extraction = extractors::extract_from_dish_name(provider, dish)
        .await
        .map_err(|e| MatchError::ExtractionError(e.to_string()))?;

    info!(
        "'{}' needs {} ingredients",
        extraction.title,
        extraction.ingredients.len()
    );

    let items = match_all_ingredients(config, &extraction.ingredients, ranking).await;
    Ok(CartPlan {
        title: extraction.title,
        items,
    })
}

/// Same flow starting from a full recipe text (e.g. a video transcript).
pub async fn plan_cart_from_text(
    config: &AppConfig,
    provider: &dyn LlmProvider,
    text: &str,
    ranking: RankingMode,
) -> Result<CartPlan, MatchError> {
    let extraction = extractors::extract_from_recipe_text(provider, text)
        .await
        .map_err(|e| MatchError::ExtractionError(e.to_string()))?;

    let items = match_all_ingredients(config, &extraction.ingredients, ranking).await;
    Ok(CartPlan {
        title: extraction.title,
        items,
    })
}
