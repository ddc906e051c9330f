//! Attribute scorers that work on raw item fields.
//!
//! Both scorers return a value in `[0.0, 1.0]`.

use super::text::normalize;
use std::collections::HashSet;

/// Score when one normalized location contains the other.
pub const LOCATION_CONTAINMENT_SCORE: f64 = 0.7;

/// Scale applied to the Jaccard overlap of location words.
///
/// Keeps partial overlap strictly below the containment tier.
pub const LOCATION_JACCARD_SCALE: f64 = 0.5;

/// Category agreement: 1.0 for a case-insensitive exact match, else 0.0.
///
/// There is no partial credit for related categories. Input is compared as
/// given; surrounding whitespace is significant.
#[must_use]
pub fn category_score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.to_lowercase() == b.to_lowercase() {
        1.0
    } else {
        0.0
    }
}

/// Lexical location similarity.
///
/// Tiers on the normalized strings:
/// - either empty: 0.0
/// - equal: 1.0
/// - one contains the other: 0.7
/// - shared words: 0.5 * Jaccard(words)
/// - otherwise: 0.0
#[must_use]
pub fn location_score(a: &str, b: &str) -> f64 {
    let la = normalize(a);
    let lb = normalize(b);

    if la.is_empty() || lb.is_empty() {
        return 0.0;
    }
    if la == lb {
        return 1.0;
    }
    if la.contains(lb.as_str()) || lb.contains(la.as_str()) {
        return LOCATION_CONTAINMENT_SCORE;
    }

    let words_a: HashSet<&str> = la.split(' ').collect();
    let words_b: HashSet<&str> = lb.split(' ').collect();

    let intersection = words_a.intersection(&words_b).count();
    if intersection == 0 {
        return 0.0;
    }
    let union = words_a.union(&words_b).count();

    LOCATION_JACCARD_SCALE * intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_case_insensitive() {
        assert_eq!(category_score("Electronics", "electronics"), 1.0);
    }

    #[test]
    fn test_category_mismatch() {
        assert_eq!(category_score("Electronics", "Accessories"), 0.0);
    }

    #[test]
    fn test_category_empty() {
        assert_eq!(category_score("", ""), 0.0);
        assert_eq!(category_score("Keys", ""), 0.0);
    }

    #[test]
    fn test_category_whitespace_is_significant() {
        assert_eq!(category_score("Keys ", "keys"), 0.0);
        assert_eq!(category_score("  ", "  "), 1.0);
        assert_eq!(category_score(" Keys", " KEYS"), 1.0);
    }

    #[test]
    fn test_location_exact() {
        assert_eq!(location_score("Main Library", "Main Library"), 1.0);
    }

    #[test]
    fn test_location_exact_after_normalization() {
        assert_eq!(location_score("main  library!", "MAIN LIBRARY"), 1.0);
    }

    #[test]
    fn test_location_containment() {
        assert_eq!(location_score("Main Library", "Main Library, 2nd Floor"), 0.7);
        assert_eq!(location_score("Main Library, 2nd Floor", "Main Library"), 0.7);
    }

    #[test]
    fn test_location_jaccard() {
        // {main} / {main, library, gym}
        let score = location_score("Main Library", "Main Gym");
        assert!(score > 0.0 && score <= 0.5);
        assert!((score - 0.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_location_no_overlap() {
        assert_eq!(location_score("Library", "Gym"), 0.0);
    }

    #[test]
    fn test_location_empty() {
        assert_eq!(location_score("", "Gym"), 0.0);
        assert_eq!(location_score("...", "Gym"), 0.0);
    }
}
