//! Trait definitions for item matching strategies.
//!
//! This module provides the abstraction the repository pipeline and CLI
//! depend on, so that alternative scorers can be plugged in for testing.

use super::explain::{explain_candidate, MatchExplanation};
use super::MatchConfig;
use crate::model::{Item, ItemId, MatchCandidate};
use rayon::prelude::*;
use serde::Serialize;

/// A candidate together with its human-readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedMatch {
    #[serde(flatten)]
    pub candidate: MatchCandidate,
    pub explanation: MatchExplanation,
}

impl From<MatchCandidate> for ExplainedMatch {
    fn from(candidate: MatchCandidate) -> Self {
        let explanation = explain_candidate(&candidate);
        Self {
            candidate,
            explanation,
        }
    }
}

/// Trait for item matching strategies.
///
/// Implementors rank a pool of opposite-kind items against one query item.
///
/// # Example
///
/// ```
/// use lostfound_matcher::matching::{ItemMatcher, MatchConfig, TfidfMatcher};
/// use lostfound_matcher::model::Item;
///
/// let matcher = TfidfMatcher::new(MatchConfig::default());
/// let query = Item::lost(1, "Keys", "car keys", "Parking Lot");
/// let pool = vec![Item::found(10, "Keys", "car keys", "Parking Lot")];
/// let matches = matcher.find_matches(&query, &pool);
/// assert_eq!(matches.len(), 1);
/// ```
pub trait ItemMatcher: Send + Sync {
    /// Rank `pool` against `query`.
    ///
    /// The result is sorted by descending confidence, holds at most
    /// `config().top_n` entries, each with confidence at or above
    /// `config().threshold`. Never fails; degenerate input yields an empty list.
    fn find_matches(&self, query: &Item, pool: &[Item]) -> Vec<MatchCandidate>;

    /// Rank `pool` against `query` and attach an explanation to each result.
    fn find_explained_matches(&self, query: &Item, pool: &[Item]) -> Vec<ExplainedMatch> {
        self.find_matches(query, pool)
            .into_iter()
            .map(ExplainedMatch::from)
            .collect()
    }

    /// Match every query against the same pool in parallel.
    ///
    /// Each query is an independent matching call; results keep query order.
    fn find_matches_batch(&self, queries: &[Item], pool: &[Item]) -> Vec<(ItemId, Vec<MatchCandidate>)> {
        queries
            .par_iter()
            .map(|query| (query.id, self.find_matches(query, pool)))
            .collect()
    }

    /// Options this matcher ranks with.
    fn config(&self) -> MatchConfig;

    /// Get the name of this matcher for logging/debugging.
    fn name(&self) -> &'static str {
        "ItemMatcher"
    }
}
