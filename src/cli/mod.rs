//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler returns the process exit code on success.

mod explain;
mod matching;

pub use explain::{run_explain, ExplainArgs};
pub use matching::{run_match, run_match_all};

use crate::config::{AppConfig, Validatable};
use crate::error::MatcherError;
use anyhow::Result;

/// Reject invalid configuration before doing any work.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(MatcherError::validation(format!(
        "invalid configuration:\n  {}",
        messages.join("\n  ")
    ))
    .into())
}
