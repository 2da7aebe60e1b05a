use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

/// Marketplace a product listing was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Baemin,
    Coupang,
    Kurly,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Baemin => write!(f, "baemin"),
            Platform::Coupang => write!(f, "coupang"),
            Platform::Kurly => write!(f, "kurly"),
        }
    }
}

/// One raw scraped product listing.
///
/// `name` and `price` come straight off the search-results page; the title may
/// carry bracketed tags, pack counts and promotional noise, which is what the
/// matching engine parses back out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Whole currency units (won), no minor unit.
    pub price: u32,
    pub url: String,
    pub platform: Platform,
    /// Calorie value when the marketplace exposes one directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(
        default,
        rename = "imageUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

/// Ingredient as produced by the LLM extraction step.
///
/// `amount` is a string-encoded number; callers parse it with
/// [`Ingredient::parsed_amount`] before handing a target quantity to the
/// matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl Ingredient {
    pub fn parsed_amount(&self) -> Result<f64, MatchError> {
        self.amount
            .trim()
            .parse::<f64>()
            .map_err(|_| MatchError::InvalidAmount(self.amount.clone()))
    }

    pub fn target_unit(&self) -> Result<TargetUnit, MatchError> {
        self.unit.parse()
    }
}

/// Unit of a requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetUnit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
}

impl TargetUnit {
    /// Collapse to grams or milliliters.
    pub fn normalize(&self, quantity: f64) -> f64 {
        match self {
            TargetUnit::Gram | TargetUnit::Milliliter => quantity,
            TargetUnit::Kilogram | TargetUnit::Liter => quantity * 1000.0,
        }
    }
}

impl FromStr for TargetUnit {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" => Ok(TargetUnit::Gram),
            "kg" => Ok(TargetUnit::Kilogram),
            "ml" => Ok(TargetUnit::Milliliter),
            "l" => Ok(TargetUnit::Liter),
            other => Err(MatchError::InvalidUnit(other.to_string())),
        }
    }
}

/// User-selected optimization target for the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    #[default]
    Price,
    Calorie,
}

impl FromStr for RankingMode {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(RankingMode::Price),
            "calorie" => Ok(RankingMode::Calorie),
            other => Err(MatchError::InvalidMode(other.to_string())),
        }
    }
}

/// Canonical unit of a parsed package size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "ea")]
    Each,
}

impl fmt::Display for PackUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackUnit::Gram => write!(f, "g"),
            PackUnit::Milliliter => write!(f, "ml"),
            PackUnit::Each => write!(f, "ea"),
        }
    }
}

/// Package size extracted from a listing title.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    pub quantity: f64,
    pub unit: PackUnit,
}

/// One ingredient's match outcome within a bulk run.
///
/// `product: None` means "no suitable product found" and is rendered as such,
/// never treated as a fault.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientMatch {
    pub ingredient: Ingredient,
    pub product: Option<Product>,
}

/// Matched shopping list for a whole dish.
#[derive(Debug, Clone, Serialize)]
pub struct CartPlan {
    pub title: String,
    pub items: Vec<IngredientMatch>,
}
