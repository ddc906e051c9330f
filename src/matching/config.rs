//! Matching configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of candidates returned per query.
pub const DEFAULT_TOP_N: usize = 3;

/// Default minimum confidence (0-100 scale).
pub const DEFAULT_THRESHOLD: f64 = 40.0;

/// Options recognized by the matcher.
///
/// Weights and location tiers are fixed constants and cannot be configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum number of candidates returned
    pub top_n: usize,
    /// Minimum confidence a candidate needs to be reported (0-100)
    pub threshold: f64,
}

impl MatchConfig {
    /// High bar: only candidates with substantial description overlap.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            threshold: 60.0,
        }
    }

    /// Default settings.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Low bar for browsing a larger set of candidates.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            top_n: 10,
            threshold: 25.0,
        }
    }

    /// Set the number of candidates returned.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set a custom threshold value.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create config from a preset name ("strict", "balanced", "permissive").
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(Self::strict()),
            "balanced" | "default" => Some(Self::balanced()),
            "permissive" | "loose" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Names accepted by [`MatchConfig::from_preset`].
    #[must_use]
    pub const fn preset_names() -> &'static [&'static str] {
        &["strict", "balanced", "permissive"]
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.threshold, 40.0);
    }

    #[test]
    fn test_from_preset() {
        assert_eq!(MatchConfig::from_preset("STRICT"), Some(MatchConfig::strict()));
        assert_eq!(MatchConfig::from_preset("default"), Some(MatchConfig::balanced()));
        assert!(MatchConfig::from_preset("fuzzy").is_none());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::default().with_top_n(5).with_threshold(55.5);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.threshold, 55.5);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: MatchConfig = serde_yaml::from_str("threshold: 70.0\n").unwrap();
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.threshold, 70.0);
    }
}
