//! Human-readable explanations of match scores.
//!
//! Explanations are derived from the scored output only and never feed back
//! into ranking.

use crate::model::MatchCandidate;
use serde::{Deserialize, Serialize};

/// Overall verdict for a match, banded by confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "strong match")]
    Strong,
    #[serde(rename = "good match")]
    Good,
    #[serde(rename = "possible match")]
    Possible,
    #[serde(rename = "weak match")]
    Weak,
}

impl Verdict {
    /// Band a confidence value (0-100). First matching band wins.
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            Self::Strong
        } else if confidence >= 60.0 {
            Self::Good
        } else if confidence >= 40.0 {
            Self::Possible
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong match",
            Self::Good => "good match",
            Self::Possible => "possible match",
            Self::Weak => "weak match",
        }
    }

    /// Guidance shown to the person reviewing the match.
    #[must_use]
    pub const fn advice(&self) -> &'static str {
        match self {
            Self::Strong => "highly likely to be your item",
            Self::Good => "worth investigating",
            Self::Possible => "check carefully",
            Self::Weak => "proceed with caution",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reason contributing to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchReason {
    #[serde(rename = "exact category match")]
    ExactCategory,
    /// Only produced for partial category scores, which the binary
    /// category scorer never emits.
    #[serde(rename = "similar category")]
    SimilarCategory,
    #[serde(rename = "same or nearby location")]
    NearbyLocation,
    #[serde(rename = "similar area")]
    SimilarArea,
    #[serde(rename = "very similar description")]
    VerySimilarDescription,
    #[serde(rename = "matching description elements")]
    MatchingDescriptionElements,
    #[serde(rename = "some description overlap")]
    SomeDescriptionOverlap,
}

impl MatchReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExactCategory => "exact category match",
            Self::SimilarCategory => "similar category",
            Self::NearbyLocation => "same or nearby location",
            Self::SimilarArea => "similar area",
            Self::VerySimilarDescription => "very similar description",
            Self::MatchingDescriptionElements => "matching description elements",
            Self::SomeDescriptionOverlap => "some description overlap",
        }
    }

    /// Whether this reason is a top-tier signal rather than a partial one.
    #[must_use]
    pub const fn is_strong(&self) -> bool {
        matches!(
            self,
            Self::ExactCategory | Self::NearbyLocation | Self::VerySimilarDescription
        )
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub verdict: Verdict,
    pub reasons: Vec<MatchReason>,
}

impl MatchExplanation {
    /// Generate a one-line summary, e.g. `strong match: exact category match, similar area`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            self.verdict.to_string()
        } else {
            let reasons: Vec<&str> = self.reasons.iter().map(MatchReason::as_str).collect();
            format!("{}: {}", self.verdict, reasons.join(", "))
        }
    }

    /// Generate a multi-line explanation with markers for strong (`+`) and
    /// partial (`~`) reasons.
    #[must_use]
    pub fn detailed(&self) -> String {
        let mut lines = vec![format!("{} - {}", self.verdict, self.verdict.advice())];
        for reason in &self.reasons {
            let marker = if reason.is_strong() { '+' } else { '~' };
            lines.push(format!("  {marker} {reason}"));
        }
        lines.join("\n")
    }
}

impl std::fmt::Display for MatchExplanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Explain a match from its scores, all on the 0-100 scale.
#[must_use]
pub fn explain(confidence: f64, category: f64, location: f64, description: f64) -> MatchExplanation {
    let mut reasons = Vec::new();

    if category >= 100.0 {
        reasons.push(MatchReason::ExactCategory);
    } else if category > 0.0 {
        reasons.push(MatchReason::SimilarCategory);
    }

    if location >= 70.0 {
        reasons.push(MatchReason::NearbyLocation);
    } else if location >= 40.0 {
        reasons.push(MatchReason::SimilarArea);
    }

    if description >= 70.0 {
        reasons.push(MatchReason::VerySimilarDescription);
    } else if description >= 50.0 {
        reasons.push(MatchReason::MatchingDescriptionElements);
    } else if description >= 30.0 {
        reasons.push(MatchReason::SomeDescriptionOverlap);
    }

    MatchExplanation {
        verdict: Verdict::from_confidence(confidence),
        reasons,
    }
}

/// Explain a scored candidate.
#[must_use]
pub fn explain_candidate(candidate: &MatchCandidate) -> MatchExplanation {
    explain(
        candidate.confidence,
        candidate.category,
        candidate.location,
        candidate.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_bands() {
        assert_eq!(explain(81.0, 0.0, 0.0, 0.0).verdict.as_str(), "strong match");
        assert_eq!(explain(80.0, 0.0, 0.0, 0.0).verdict, Verdict::Strong);
        assert_eq!(explain(60.0, 0.0, 0.0, 0.0).verdict, Verdict::Good);
        assert_eq!(explain(40.0, 0.0, 0.0, 0.0).verdict.as_str(), "possible match");
        assert_eq!(explain(39.99, 0.0, 0.0, 0.0).verdict, Verdict::Weak);
        assert_eq!(explain(10.0, 0.0, 0.0, 0.0).verdict.as_str(), "weak match");
    }

    #[test]
    fn test_reason_order() {
        let explanation = explain(90.0, 100.0, 100.0, 85.0);
        assert_eq!(
            explanation.reasons,
            vec![
                MatchReason::ExactCategory,
                MatchReason::NearbyLocation,
                MatchReason::VerySimilarDescription,
            ]
        );
    }

    #[test]
    fn test_location_tiers() {
        assert_eq!(explain(0.0, 0.0, 70.0, 0.0).reasons, vec![MatchReason::NearbyLocation]);
        assert_eq!(explain(0.0, 0.0, 40.0, 0.0).reasons, vec![MatchReason::SimilarArea]);
        assert!(explain(0.0, 0.0, 39.0, 0.0).reasons.is_empty());
    }

    #[test]
    fn test_description_tiers() {
        assert_eq!(
            explain(0.0, 0.0, 0.0, 50.0).reasons,
            vec![MatchReason::MatchingDescriptionElements]
        );
        assert_eq!(
            explain(0.0, 0.0, 0.0, 30.0).reasons,
            vec![MatchReason::SomeDescriptionOverlap]
        );
        assert!(explain(0.0, 0.0, 0.0, 29.9).reasons.is_empty());
    }

    #[test]
    fn test_partial_category_reason() {
        assert_eq!(
            explain(0.0, 50.0, 0.0, 0.0).reasons,
            vec![MatchReason::SimilarCategory]
        );
    }

    #[test]
    fn test_serializes_as_strings() {
        let json = serde_json::to_value(explain(65.0, 100.0, 45.0, 0.0)).unwrap();
        assert_eq!(json["verdict"], "good match");
        assert_eq!(json["reasons"][0], "exact category match");
        assert_eq!(json["reasons"][1], "similar area");
    }

    #[test]
    fn test_summary_and_detailed() {
        let explanation = explain(85.0, 100.0, 50.0, 0.0);
        assert_eq!(
            explanation.summary(),
            "strong match: exact category match, similar area"
        );
        let detailed = explanation.detailed();
        assert!(detailed.starts_with("strong match - highly likely to be your item"));
        assert!(detailed.contains("+ exact category match"));
        assert!(detailed.contains("~ similar area"));
    }
}
