//! The product-matching engine.
//!
//! Pure, synchronous functions that take raw scraped listings plus a target
//! quantity and deterministically pick the single best product. No I/O, no
//! shared state; every invocation only reads its input and discards its
//! derived data, so concurrent calls need no locking.

pub mod quantity;
pub mod score;
pub mod select;

pub use quantity::{parse_calories, parse_quantity};
pub use score::{score_match, score_match_with};
pub use select::{select_best_match, select_best_match_with};
