//! Report generation for match results.
//!
//! This module provides output formats for ranked matches:
//! - JSON: Structured data for programmatic integration
//! - Summary: Per-query verdicts with reasons
//! - Table: Aligned tabular terminal output

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{MatchReport, ReportFormat, ReportedMatch};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render one report per query item.
    fn generate(&self, reports: &[MatchReport]) -> Result<String, ReportError>;

    /// Write the rendered reports to a writer
    fn write_to(&self, reports: &[MatchReport], writer: &mut dyn Write) -> Result<(), ReportError> {
        let report = self.generate(reports)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Pick the reporter for a concrete format. `Auto` falls back to summary.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Table => {
            let reporter = TableReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Summary | ReportFormat::Auto => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
    }
}
