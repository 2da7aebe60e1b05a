use regex::Regex;
use std::sync::LazyLock;

use crate::model::{PackUnit, ParsedQuantity};

// Multiplier forms must be tried before the single form, otherwise the base
// quantity alone would be taken from titles like "100g x 10".
static UNIT_TIMES_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kg|g|ml|l)\s*[x×*]\s*(\d+(?:\.\d+)?)").unwrap()
});

static UNIT_PACK_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kg|g|ml|l)\s*\(?\s*(\d+)\s*(?:개입|개|입|팩|봉|포|구|박스|box)")
        .unwrap()
});

static COUNT_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:개입|개|입|팩|봉|포|구|박스|box)").unwrap());

static SINGLE_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kg|g|ml|l)").unwrap());

fn canonical(value: f64, unit: &str) -> (f64, PackUnit) {
    match unit.to_ascii_lowercase().as_str() {
        "kg" => (value * 1000.0, PackUnit::Gram),
        "g" => (value, PackUnit::Gram),
        "l" => (value * 1000.0, PackUnit::Milliliter),
        "ml" => (value, PackUnit::Milliliter),
        _ => (value, PackUnit::Each),
    }
}

/// Extract a package size from a free-form listing title.
///
/// Patterns are tried in priority order and the first match wins: explicit
/// multiplier ("100g x 10"), pack-count multiplier ("100g(10개입)", "100g 10개"),
/// bare count ("10개입"), then a single quantity/unit pair ("500ml", "2L").
/// Mass collapses to grams, volume to milliliters, pack-count tokens to an
/// "each" count. Returns `None` when the title carries no quantity expression;
/// downstream treats that as quantity-unknown, not as a failure.
pub fn parse_quantity(name: &str) -> Option<ParsedQuantity> {
    if let Some(caps) = UNIT_TIMES_COUNT_RE.captures(name) {
        let base: f64 = caps[1].parse().ok()?;
        let count: f64 = caps[3].parse().ok()?;
        let (value, unit) = canonical(base, &caps[2]);
        return Some(ParsedQuantity {
            quantity: value * count,
            unit,
        });
    }

    if let Some(caps) = UNIT_PACK_COUNT_RE.captures(name) {
        let base: f64 = caps[1].parse().ok()?;
        let count: f64 = caps[3].parse().ok()?;
        let (value, unit) = canonical(base, &caps[2]);
        return Some(ParsedQuantity {
            quantity: value * count,
            unit,
        });
    }

    if let Some(caps) = COUNT_ONLY_RE.captures(name) {
        let count: f64 = caps[1].parse().ok()?;
        return Some(ParsedQuantity {
            quantity: count,
            unit: PackUnit::Each,
        });
    }

    if let Some(caps) = SINGLE_UNIT_RE.captures(name) {
        let base: f64 = caps[1].parse().ok()?;
        let (value, unit) = canonical(base, &caps[2]);
        return Some(ParsedQuantity {
            quantity: value,
            unit,
        });
    }

    None
}

static CALORIE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:kcal|칼로리)").unwrap());

// Marketing vocabulary that marks a product as low-calorie even when the title
// carries no figure.
const LOW_CALORIE_KEYWORDS: &[&str] = &[
    "제로",
    "zero",
    "다이어트",
    "diet",
    "라이트",
    "light",
    "무설탕",
    "sugar free",
    "슈가프리",
    "곤약",
    "konjac",
    "슬림",
    "slim",
    "저칼로리",
    "low calorie",
];

/// Extract a calorie value from a listing title.
///
/// An explicit figure ("330kcal", "50칼로리") wins. Without one, any
/// low-calorie marketing keyword yields a synthetic `Some(0.0)` so the listing
/// ranks first under calorie mode; that zero is a scoring convenience, not a
/// measured value. `None` means the title says nothing about calories.
pub fn parse_calories(name: &str) -> Option<f64> {
    if let Some(caps) = CALORIE_RE.captures(name) {
        return caps[1].parse().ok();
    }

    let lowered = name.to_lowercase();
    if LOW_CALORIE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return Some(0.0);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_multiplier() {
        let parsed = parse_quantity("닭가슴살 100g x 10").unwrap();
        assert_eq!(parsed.quantity, 1000.0);
        assert_eq!(parsed.unit, PackUnit::Gram);

        let parsed = parse_quantity("생수 500ml×20").unwrap();
        assert_eq!(parsed.quantity, 10000.0);
        assert_eq!(parsed.unit, PackUnit::Milliliter);
    }

    #[test]
    fn test_pack_count_multiplier() {
        let parsed = parse_quantity("훈제란 100g(10개입)").unwrap();
        assert_eq!(parsed.quantity, 1000.0);
        assert_eq!(parsed.unit, PackUnit::Gram);

        let parsed = parse_quantity("베이컨 500g 2팩").unwrap();
        assert_eq!(parsed.quantity, 1000.0);
        assert_eq!(parsed.unit, PackUnit::Gram);
    }

    #[test]
    fn test_bare_count() {
        let parsed = parse_quantity("계란 10개입").unwrap();
        assert_eq!(parsed.quantity, 10.0);
        assert_eq!(parsed.unit, PackUnit::Each);

        let parsed = parse_quantity("라면 1박스").unwrap();
        assert_eq!(parsed.quantity, 1.0);
        assert_eq!(parsed.unit, PackUnit::Each);
    }

    #[test]
    fn test_single_form() {
        let parsed = parse_quantity("물 2L").unwrap();
        assert_eq!(parsed.quantity, 2000.0);
        assert_eq!(parsed.unit, PackUnit::Milliliter);

        let parsed = parse_quantity("설탕 1kg").unwrap();
        assert_eq!(parsed.quantity, 1000.0);
        assert_eq!(parsed.unit, PackUnit::Gram);

        let parsed = parse_quantity("우유 900ml").unwrap();
        assert_eq!(parsed.quantity, 900.0);
        assert_eq!(parsed.unit, PackUnit::Milliliter);
    }

    #[test]
    fn test_no_quantity_expression() {
        assert!(parse_quantity("브랜드 상품명").is_none());
        assert!(parse_quantity("").is_none());
    }

    #[test]
    fn test_multiplier_wins_over_single() {
        // The 100g base alone would be wrong here
        let parsed = parse_quantity("두부 100g x 3 국산콩").unwrap();
        assert_eq!(parsed.quantity, 300.0);
    }

    #[test]
    fn test_explicit_calories() {
        assert_eq!(parse_calories("닭가슴살 스테이크 130kcal"), Some(130.0));
        assert_eq!(parse_calories("곤약젤리 5칼로리"), Some(5.0));
    }

    #[test]
    fn test_keyword_synthetic_zero() {
        assert_eq!(parse_calories("제로 콜라"), Some(0.0));
        assert_eq!(parse_calories("스프라이트 Zero 355ml"), Some(0.0));
        assert_eq!(parse_calories("다이어트 보조 곤약면"), Some(0.0));
    }

    #[test]
    fn test_no_calorie_information() {
        assert_eq!(parse_calories("오렌지 주스 500ml"), None);
        assert_eq!(parse_calories("신선한 계란 30구"), None);
    }
}
