//! Configuration module for lostfound-matcher.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named matching presets
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use lostfound_matcher::config::AppConfig;
//!
//! let config = AppConfig::builder()
//!     .preset("strict")
//!     .top_n(5)
//!     .build();
//! assert_eq!(config.match_config().threshold, 60.0);
//! ```
//!
//! # Configuration File
//!
//! Place a `.lostfound-matcher.yaml` file in your working directory or
//! `~/.config/lostfound-matcher/`:
//!
//! ```yaml
//! matching:
//!   preset: strict
//!   top_n: 5
//! output:
//!   format: json
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, MatchingConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    default_config_path, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all options accepted in `.lostfound-matcher.yaml`
/// and can be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"matching\""));
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"behavior\""));
        assert!(schema.contains("\"preset\""));
    }
}
