use log::debug;

use crate::config::MatchingConfig;
use crate::matching::quantity::{parse_calories, parse_quantity};
use crate::matching::score::score_match_with;
use crate::model::{Product, RankingMode, TargetUnit};

/// A candidate with its per-invocation derived data. Lives only within one
/// selection call.
#[derive(Clone, Copy)]
struct Scored<'a> {
    product: &'a Product,
    score: i64,
    quantity: f64,
    calories: Option<f64>,
}

/// Pick the single best product for a requested quantity, with default tuning.
pub fn select_best_match(
    candidates: &[Product],
    target_quantity: f64,
    target_unit: TargetUnit,
    ranking: RankingMode,
    query: Option<&str>,
) -> Option<Product> {
    select_best_match_with(
        &MatchingConfig::default(),
        candidates,
        target_quantity,
        target_unit,
        ranking,
        query,
    )
}

/// Pick the single best product for a requested quantity.
///
/// Candidates are scored for relevance against `query`, bucketed by how
/// closely their parsed package size fits the normalized target, and the best
/// bucket is ordered by the requested ranking mode. Malformed candidate data
/// never fails the call: an unparseable package size demotes a candidate and
/// missing calories rank as worst-case. Only a relevance wipe-out (every
/// candidate scoring ≤ 0 against the query) returns `None` while candidates
/// exist — an irrelevant product must not be offered as a fallback.
pub fn select_best_match_with(
    config: &MatchingConfig,
    candidates: &[Product],
    target_quantity: f64,
    target_unit: TargetUnit,
    ranking: RankingMode,
    query: Option<&str>,
) -> Option<Product> {
    let target = target_unit.normalize(target_quantity);

    let scored: Vec<Scored> = candidates
        .iter()
        .map(|product| {
            let score = match query {
                Some(q) => score_match_with(&config.weights, q, &product.name),
                // no query, no filtering: every candidate gets the top score
                None => config.weights.exact,
            };
            let quantity = parse_quantity(&product.name)
                .map(|p| p.quantity)
                .unwrap_or(0.0);
            let calories = product.calories.or_else(|| parse_calories(&product.name));
            Scored {
                product,
                score,
                quantity,
                calories,
            }
        })
        .collect();

    let relevant: Vec<Scored> = scored
        .into_iter()
        .filter(|c| query.is_none() || c.score > 0)
        .collect();
    if relevant.is_empty() {
        debug!("No relevant candidate among {}", candidates.len());
        return None;
    }

    let mut sized: Vec<Scored> = relevant
        .iter()
        .copied()
        .filter(|c| c.quantity > 0.0)
        .collect();
    if sized.is_empty() {
        // Quantity-unknown is survivable; relevance failure is not.
        return Some(relevant[0].product.clone());
    }

    let diff = |c: &Scored| (c.quantity - target).abs();
    let within = |c: &Scored, lo: f64, hi: f64| {
        let ratio = c.quantity / target;
        ratio >= lo && ratio <= hi
    };

    let mut pool: Vec<Scored> = sized
        .iter()
        .copied()
        .filter(|c| within(c, config.close_fit_min, config.close_fit_max))
        .collect();
    if pool.is_empty() {
        pool = sized
            .iter()
            .copied()
            .filter(|c| within(c, config.acceptable_min, config.acceptable_max))
            .collect();
    }
    if pool.is_empty() {
        sized.sort_by(|a, b| diff(a).total_cmp(&diff(b)));
        sized.truncate(config.best_effort_pool);
        pool = sized;
    }

    pool.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| match ranking {
            RankingMode::Price => a
                .product
                .price
                .cmp(&b.product.price)
                .then_with(|| diff(a).total_cmp(&diff(b))),
            RankingMode::Calorie => {
                let ca = a.calories.unwrap_or(config.unknown_calories);
                let cb = b.calories.unwrap_or(config.unknown_calories);
                ca.total_cmp(&cb)
                    .then_with(|| a.product.price.cmp(&b.product.price))
                    .then_with(|| diff(a).total_cmp(&diff(b)))
            }
        })
    });

    pool.first().map(|c| (*c.product).clone())
}
