//! Scored match results.

use super::ItemId;
use serde::{Deserialize, Serialize};

/// A candidate item scored against a query item.
///
/// All scores are on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Identifier of the matched item from the candidate pool
    pub candidate_id: ItemId,
    /// Weighted combination of the three component scores
    pub confidence: f64,
    /// Lexical similarity of the feature texts
    pub description: f64,
    /// Category agreement (0 or 100)
    pub category: f64,
    /// Location similarity
    pub location: f64,
}

impl MatchCandidate {
    /// One-line rendering used in logs and summaries.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.1}% (description: {:.1}, category: {:.1}, location: {:.1})",
            self.candidate_id, self.confidence, self.description, self.category, self.location
        )
    }
}
