//! Multi-signal confidence scoring.
//!
//! This module combines the description, category and location signals into
//! a single confidence value using fixed weights.

use crate::model::{ItemId, MatchCandidate};

/// Weight of the lexical description similarity.
pub const DESCRIPTION_WEIGHT: f64 = 0.60;
/// Weight of the category agreement.
pub const CATEGORY_WEIGHT: f64 = 0.25;
/// Weight of the location similarity.
pub const LOCATION_WEIGHT: f64 = 0.15;

/// Per-pair component scores, each in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComponentScores {
    /// Cosine similarity of the feature texts
    pub description: f64,
    /// Category exact-match score
    pub category: f64,
    /// Location similarity score
    pub location: f64,
}

impl ComponentScores {
    /// Build scores, replacing non-finite values with 0.0 and clamping to `[0, 1]`.
    #[must_use]
    pub fn new(description: f64, category: f64, location: f64) -> Self {
        Self {
            description: sanitize(description),
            category: sanitize(category),
            location: sanitize(location),
        }
    }

    /// Weighted confidence on the 0-100 scale.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        // Weights are scaled before combining so that binary signals land on
        // whole percentages (category + location alone is exactly 40.0).
        let confidence = DESCRIPTION_WEIGHT * 100.0 * self.description
            + CATEGORY_WEIGHT * 100.0 * self.category
            + LOCATION_WEIGHT * 100.0 * self.location;
        confidence.clamp(0.0, 100.0)
    }

    /// Convert to the externally visible result, scaled to 0-100.
    pub fn into_candidate(self, candidate_id: ItemId) -> MatchCandidate {
        MatchCandidate {
            candidate_id,
            confidence: self.confidence(),
            description: self.description * 100.0,
            category: self.category * 100.0,
            location: self.location * 100.0,
        }
    }

    /// Get a human-readable summary of the score breakdown.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Total: {:.2} (description: {:.2}, category: {:.2}, location: {:.2})",
            self.confidence(),
            self.description,
            self.category,
            self.location
        )
    }
}

fn sanitize(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((DESCRIPTION_WEIGHT + CATEGORY_WEIGHT + LOCATION_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_confidence_is_exactly_100() {
        let scores = ComponentScores::new(1.0, 1.0, 1.0);
        assert_eq!(scores.confidence(), 100.0);
    }

    #[test]
    fn test_attribute_only_maximum_is_40() {
        let scores = ComponentScores::new(0.0, 1.0, 1.0);
        assert_eq!(scores.confidence(), 40.0);
    }

    #[test]
    fn test_weighted_combination() {
        let scores = ComponentScores::new(0.5, 1.0, 0.7);
        // 0.30 + 0.25 + 0.105
        assert!((scores.confidence() - 65.5).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_scores_become_zero() {
        let scores = ComponentScores::new(f64::NAN, f64::INFINITY, -1.0);
        assert_eq!(scores, ComponentScores::default());
        assert_eq!(scores.confidence(), 0.0);
    }

    #[test]
    fn test_into_candidate_scales() {
        let candidate = ComponentScores::new(0.5, 1.0, 0.0).into_candidate(ItemId(4));
        assert_eq!(candidate.candidate_id, ItemId(4));
        assert_eq!(candidate.category, 100.0);
        assert_eq!(candidate.description, 50.0);
        assert_eq!(candidate.location, 0.0);
    }

    #[test]
    fn test_summary() {
        let summary = ComponentScores::new(1.0, 1.0, 1.0).summary();
        assert!(summary.contains("100.00"));
    }
}
