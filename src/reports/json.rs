//! JSON report generator.

use super::{MatchReport, ReportError, ReportFormat, ReportGenerator};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to pretty-print the output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a compact (non-pretty) JSON reporter
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    metadata: JsonMetadata,
    summary: JsonSummary,
    reports: &'a [MatchReport],
}

#[derive(Serialize)]
struct JsonMetadata {
    tool: &'static str,
    version: &'static str,
    generated_at: String,
}

#[derive(Serialize)]
struct JsonSummary {
    queries: usize,
    queries_with_matches: usize,
    total_matches: usize,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, reports: &[MatchReport]) -> Result<String, ReportError> {
        let output = JsonOutput {
            metadata: JsonMetadata {
                tool: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                generated_at: Utc::now().to_rfc3339(),
            },
            summary: JsonSummary {
                queries: reports.len(),
                queries_with_matches: reports.iter().filter(|r| r.has_matches()).count(),
                total_matches: reports.iter().map(|r| r.matches.len()).sum(),
            },
            reports,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{ItemMatcher, MatchConfig, TfidfMatcher};
    use crate::model::Item;

    #[test]
    fn test_json_structure() {
        let query = Item::lost(1, "Keys", "car keys", "Lot B");
        let pool = vec![
            Item::found(7, "Keys", "car keys", "Lot B"),
            Item::found(8, "Books", "novel", "Library"),
        ];
        let matcher = TfidfMatcher::new(MatchConfig::default());
        let report = MatchReport::new(&query, &pool, matcher.config(), matcher.find_explained_matches(&query, &pool));

        let json = JsonReporter::compact().generate(&[report]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["queries"], 1);
        assert_eq!(value["summary"]["total_matches"], 1);
        let first = &value["reports"][0]["matches"][0];
        assert_eq!(first["rank"], 1);
        assert_eq!(first["candidate_id"], 7);
        assert_eq!(first["name"], "car keys");
        assert_eq!(first["confidence"], 100.0);
        assert_eq!(first["explanation"]["verdict"], "strong match");
        assert_eq!(value["reports"][0]["query_kind"], "lost");
        assert_eq!(value["reports"][0]["pool_size"], 2);
    }
}
