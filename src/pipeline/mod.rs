//! Pipeline orchestration for matching runs.
//!
//! This module provides the shared repository → match → report workflow
//! used by the CLI command handlers.

mod match_stage;
mod output;

pub use match_stage::{match_all, match_report};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for scripting
pub mod exit_codes {
    /// At least one match was reported
    pub const SUCCESS: i32 = 0;
    /// No candidate passed the threshold
    pub const NO_MATCHES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
