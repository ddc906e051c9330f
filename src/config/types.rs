//! Configuration types for lostfound-matcher.

use crate::matching::MatchConfig;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override values loaded from a config file
/// (see [`AppConfig::merge`](crate::config::file)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Matching configuration (preset, top N, threshold)
    pub matching: MatchingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve the effective matcher options.
    #[must_use]
    pub fn match_config(&self) -> MatchConfig {
        self.matching.to_match_config()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the matching preset.
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.config.matching.preset = Some(preset.into());
        self
    }

    /// Set the number of candidates returned per query.
    pub const fn top_n(mut self, top_n: usize) -> Self {
        self.config.matching.top_n = Some(top_n);
        self
    }

    /// Set the matching threshold.
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.config.matching.threshold = Some(threshold);
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Treat "no matches" as success for exit-code purposes.
    pub const fn allow_empty(mut self, allow: bool) -> Self {
        self.config.behavior.allow_empty = allow;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Preset used when none is configured.
pub const DEFAULT_PRESET: &str = "balanced";

/// Matching configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Preset name: strict, balanced or permissive (balanced when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Maximum candidates per query (overrides preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub top_n: Option<usize>,
    /// Minimum confidence on the 0-100 scale (overrides preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 100.0))]
    pub threshold: Option<f64>,
}

impl MatchingConfig {
    /// Configured preset name, or the default.
    #[must_use]
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    /// Resolve the preset and apply explicit overrides.
    ///
    /// Unknown presets fall back to `balanced`; validation reports them.
    #[must_use]
    pub fn to_match_config(&self) -> MatchConfig {
        let mut config = MatchConfig::from_preset(self.preset_name()).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown matching preset '{}', using '{DEFAULT_PRESET}'. Valid presets: {}",
                self.preset_name(),
                MatchConfig::preset_names().join(", ")
            );
            MatchConfig::balanced()
        });

        if let Some(top_n) = self.top_n {
            config = config.with_top_n(top_n);
        }
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        config
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress informational log output
    pub quiet: bool,
    /// Exit with success even when no candidate passes the threshold
    pub allow_empty: bool,
}
