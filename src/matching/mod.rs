//! Matching engine for lost and found item reports.
//!
//! A query item is compared against a snapshot pool of opposite-kind items.
//! Three signals are combined into one confidence score:
//!
//! - **description**: TF-IDF cosine similarity of the items' feature texts
//!   ([`similarity`], [`text`])
//! - **category**: case-insensitive exact match ([`attributes`])
//! - **location**: tiered lexical location similarity ([`attributes`])
//!
//! Candidates at or above the threshold are ranked by confidence (stable on
//! pool order) and truncated to the top N.
//!
//! # Example
//!
//! ```
//! use lostfound_matcher::matching::find_matches;
//! use lostfound_matcher::model::Item;
//!
//! let lost = Item::lost(1, "Accessories", "Wallet", "Main Library")
//!     .with_description("black leather wallet with cards");
//! let pool = vec![
//!     Item::found(10, "Accessories", "Wallet", "Main Library, 2nd Floor")
//!         .with_description("black leather wallet"),
//!     Item::found(11, "Clothing", "Jacket", "South Gym")
//!         .with_description("red cotton jacket"),
//! ];
//!
//! let matches = find_matches(&lost, &pool, 3, 40.0);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].candidate_id.0, 10);
//! ```

pub mod attributes;
mod config;
pub mod explain;
pub mod scoring;
pub mod similarity;
pub mod text;
mod traits;

pub use attributes::{category_score, location_score};
pub use config::{MatchConfig, DEFAULT_THRESHOLD, DEFAULT_TOP_N};
pub use explain::{explain, explain_candidate, MatchExplanation, MatchReason, Verdict};
pub use scoring::{ComponentScores, CATEGORY_WEIGHT, DESCRIPTION_WEIGHT, LOCATION_WEIGHT};
pub use similarity::{similarities, TfidfVectorizer, VectorizeError};
pub use text::{build_feature_text, normalize};
pub use traits::{ExplainedMatch, ItemMatcher};

use crate::model::{Item, MatchCandidate};

/// TF-IDF based matcher with fixed signal weights.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct TfidfMatcher {
    config: MatchConfig,
}

impl TfidfMatcher {
    /// Create a new matcher with the given configuration
    pub const fn new(config: MatchConfig) -> Self {
        Self { config }
    }
}

impl ItemMatcher for TfidfMatcher {
    fn find_matches(&self, query: &Item, pool: &[Item]) -> Vec<MatchCandidate> {
        find_matches(query, pool, self.config.top_n, self.config.threshold)
    }

    fn config(&self) -> MatchConfig {
        self.config
    }

    fn name(&self) -> &'static str {
        "TfidfMatcher"
    }
}

/// Score every candidate in `pool` against `query`, in pool order.
///
/// Fails only when the combined corpus has no vocabulary.
pub fn score_pool(query: &Item, pool: &[Item]) -> Result<Vec<ComponentScores>, VectorizeError> {
    let query_text = build_feature_text(query);
    let candidate_texts: Vec<String> = pool.iter().map(build_feature_text).collect();

    let description_scores = similarities(&query_text, &candidate_texts)?;

    Ok(pool
        .iter()
        .zip(description_scores)
        .map(|(candidate, description)| {
            ComponentScores::new(
                description,
                category_score(&query.category, &candidate.category),
                location_score(query.match_location(), candidate.match_location()),
            )
        })
        .collect())
}

/// Find the best candidates for `query` in `pool`.
///
/// Returns at most `top_n` candidates with confidence `>= threshold`
/// (0-100 scale), sorted by descending confidence. Ties keep pool order.
/// An empty pool or a corpus without vocabulary yields an empty list.
#[must_use]
pub fn find_matches(query: &Item, pool: &[Item], top_n: usize, threshold: f64) -> Vec<MatchCandidate> {
    if pool.is_empty() {
        return Vec::new();
    }

    let scores = match score_pool(query, pool) {
        Ok(scores) => scores,
        Err(e) => {
            tracing::warn!("Matching {} {} skipped: {e}", query.kind(), query.id);
            return Vec::new();
        }
    };

    let candidates = pool
        .iter()
        .zip(scores)
        .map(|(candidate, scores)| scores.into_candidate(candidate.id))
        .collect();
    let ranked = rank(candidates, top_n, threshold);

    tracing::debug!(
        query = %query.id,
        pool = pool.len(),
        matches = ranked.len(),
        "ranked candidates"
    );

    ranked
}

/// Threshold, stable sort by descending confidence, truncate.
fn rank(mut candidates: Vec<MatchCandidate>, top_n: usize, threshold: f64) -> Vec<MatchCandidate> {
    candidates.retain(|c| c.confidence >= threshold);
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    candidates.truncate(top_n);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn wallet_query() -> Item {
        Item::lost(1, "Accessories", "Wallet", "Main Library")
            .with_description("black leather wallet with cards")
            .with_color("Black")
    }

    fn candidate(id: u64, confidence: f64) -> MatchCandidate {
        MatchCandidate {
            candidate_id: ItemId(id),
            confidence,
            description: 0.0,
            category: 0.0,
            location: 0.0,
        }
    }

    #[test]
    fn test_empty_pool() {
        assert!(find_matches(&wallet_query(), &[], 3, 40.0).is_empty());
    }

    #[test]
    fn test_perfect_match() {
        let query = wallet_query();
        let mut twin = query.clone();
        twin.id = ItemId(99);
        twin.details = crate::model::ItemDetails::Found {
            found_location: "Main Library".to_string(),
            current_location: None,
            found_date: None,
        };

        let matches = find_matches(&query, &[twin], 3, 100.0);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.candidate_id, ItemId(99));
        assert_eq!(m.description, 100.0);
        assert_eq!(m.category, 100.0);
        assert_eq!(m.location, 100.0);
        assert_eq!(m.confidence, 100.0);
    }

    #[test]
    fn test_no_overlap_excluded() {
        let query = Item::lost(1, "Electronics", "", "North Library")
            .with_description("black leather wallet with cards");
        let pool = vec![Item::found(2, "Clothing", "", "South Gym").with_description("red cotton jacket")];

        let scores = score_pool(&query, &pool).unwrap();
        assert_eq!(scores[0].category, 0.0);
        assert_eq!(scores[0].location, 0.0);
        assert!(scores[0].description < 0.05);
        assert!(find_matches(&query, &pool, 3, 40.0).is_empty());
    }

    #[test]
    fn test_degenerate_corpus_returns_empty() {
        let query = Item::lost(1, "", "", "Library");
        let pool = vec![Item::found(2, "!!", "", "Library")];
        assert!(find_matches(&query, &pool, 3, 0.0).is_empty());
    }

    #[test]
    fn test_rank_stable_ties() {
        let ranked = rank(
            vec![candidate(1, 50.0), candidate(2, 70.0), candidate(3, 50.0), candidate(4, 70.0)],
            10,
            0.0,
        );
        let ids: Vec<u64> = ranked.iter().map(|c| c.candidate_id.0).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_rank_threshold_inclusive_and_truncates() {
        let ranked = rank(
            vec![candidate(1, 40.0), candidate(2, 39.999), candidate(3, 90.0), candidate(4, 60.0)],
            2,
            40.0,
        );
        let ids: Vec<u64> = ranked.iter().map(|c| c.candidate_id.0).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_attribute_only_match_reaches_default_threshold() {
        let query = Item::lost(1, "Keys", "", "Parking Lot").with_description("house keys");
        let pool = vec![Item::found(2, "keys", "", "parking lot").with_description("umbrella")];
        let matches = find_matches(&query, &pool, 3, 40.0);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].confidence >= 40.0);
    }

    #[test]
    fn test_found_query_against_lost_pool() {
        let query = Item::found(5, "Bags", "Backpack", "Cafeteria").with_description("blue backpack");
        let pool = vec![
            Item::lost(1, "Bags", "Backpack", "Cafeteria").with_description("blue backpack laptop"),
            Item::lost(2, "Books", "Notebook", "Gym"),
        ];
        let matcher = TfidfMatcher::new(MatchConfig::default());
        let matches = matcher.find_matches(&query, &pool);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].candidate_id, ItemId(1));
    }

    #[test]
    fn test_batch_preserves_query_order() {
        let pool = vec![Item::found(10, "Keys", "car keys", "Lot A")];
        let queries = vec![
            Item::lost(1, "Keys", "car keys", "Lot A"),
            Item::lost(2, "Books", "novel", "Library"),
            Item::lost(3, "Keys", "keys", "Lot A"),
        ];
        let matcher = TfidfMatcher::new(MatchConfig::default());
        let results = matcher.find_matches_batch(&queries, &pool);
        let ids: Vec<u64> = results.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(results[0].1.len(), 1);
        assert!(results[1].1.is_empty());
    }

    #[test]
    fn test_explained_matches() {
        let query = wallet_query();
        let pool = vec![Item::found(7, "Accessories", "Wallet", "Main Library")
            .with_description("black leather wallet with cards")
            .with_color("black")];
        let matcher = TfidfMatcher::new(MatchConfig::default());
        let explained = matcher.find_explained_matches(&query, &pool);
        assert_eq!(explained.len(), 1);
        assert_eq!(explained[0].explanation.verdict, Verdict::Strong);
        assert_eq!(explained[0].explanation.reasons[0], MatchReason::ExactCategory);
    }
}
