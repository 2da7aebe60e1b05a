use crate::config::MatchWeights;

// Compound suffixes that flip the product category: a query for 소금 must not
// reward 소금빵.
const CATEGORY_SUFFIXES: &[&str] = &[
    "빵", "쿠키", "케이크", "케익", "사탕", "캔디", "젤리", "음료", "주스", "과자", "스낵", "칩",
    "시럽", "bread", "cookie", "cake", "candy", "jelly", "drink", "juice", "snack", "syrup",
];

/// Relevance of a product title for an ingredient query, with default weights.
pub fn score_match(query: &str, product_name: &str) -> i64 {
    score_match_with(&MatchWeights::default(), query, product_name)
}

/// Relevance of a product title for an ingredient query.
///
/// Case-insensitive and whitespace-trimmed. An exact match returns the exact
/// weight alone. Otherwise the rules are additive and independent, so one
/// title can collect the prefix, per-word and substring bonuses at once.
/// Category-changing compound suffixes subtract per occurrence, pushing
/// lookalike products to a score ≤ 0, which the selector treats as "not a
/// real match".
pub fn score_match_with(weights: &MatchWeights, query: &str, product_name: &str) -> i64 {
    let query = query.trim().to_lowercase();
    let name = product_name.trim().to_lowercase();

    if query.is_empty() || name.is_empty() {
        return 0;
    }
    if query == name {
        return weights.exact;
    }

    let mut score = 0;

    if name.starts_with(&format!("{query} ")) {
        score += weights.prefix;
    }

    let name_words: Vec<&str> = name.split_whitespace().collect();
    for word in query.split_whitespace() {
        if name_words.iter().any(|w| *w == word) {
            score += weights.word;
        }
    }

    if name.contains(&query) {
        score += weights.substring;
    }

    if query.chars().count() >= 2 {
        for suffix in CATEGORY_SUFFIXES {
            if name.contains(&format!("{query}{suffix}")) {
                score -= weights.category_penalty;
            }
        }
    }

    score
}
