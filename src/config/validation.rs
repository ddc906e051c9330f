//! Configuration validation for lostfound-matcher.

use super::types::{AppConfig, BehaviorConfig, MatchingConfig, OutputConfig};
use crate::matching::MatchConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(preset) = &self.preset {
            if MatchConfig::from_preset(preset).is_none() {
                errors.push(ConfigError {
                    field: "matching.preset".to_string(),
                    message: format!(
                        "Invalid preset '{preset}'. Valid options: {}",
                        MatchConfig::preset_names().join(", ")
                    ),
                });
            }
        }

        if self.top_n == Some(0) {
            errors.push(ConfigError {
                field: "matching.top_n".to_string(),
                message: "top_n must be at least 1".to_string(),
            });
        }

        if let Some(threshold) = self.threshold {
            errors.extend(MatchConfig::balanced().with_threshold(threshold).validate());
        }

        errors
    }
}

impl Validatable for MatchConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.top_n == 0 {
            errors.push(ConfigError {
                field: "matching.top_n".to_string(),
                message: "top_n must be at least 1".to_string(),
            });
        }
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            errors.push(ConfigError {
                field: "matching.threshold".to_string(),
                message: format!("Threshold must be between 0 and 100, got {}", self.threshold),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
        assert!(MatchConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_preset() {
        let config = MatchingConfig {
            preset: Some("aggressive".to_string()),
            ..MatchingConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "matching.preset");
    }

    #[test]
    fn test_threshold_range() {
        for bad in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            assert!(!MatchConfig::default().with_threshold(bad).is_valid(), "{bad}");
        }
        assert!(MatchConfig::default().with_threshold(0.0).is_valid());
        assert!(MatchConfig::default().with_threshold(100.0).is_valid());

        let config = MatchingConfig {
            threshold: Some(150.0),
            ..MatchingConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_zero_top_n() {
        assert!(!MatchConfig::default().with_top_n(0).is_valid());
        let config = MatchingConfig {
            top_n: Some(0),
            ..MatchingConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent-dir-for-lostfound/out.json")),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());

        let config = OutputConfig {
            file: Some(PathBuf::from("out.json")),
            ..OutputConfig::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "matching.top_n".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(error.to_string(), "matching.top_n: must be at least 1");
    }
}
