//! Report types and configuration.

use crate::matching::{ExplainedMatch, MatchConfig};
use crate::model::{Item, ItemId, ItemKind};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON for files and pipes
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Brief per-query summary with explanations
    Summary,
    /// Compact aligned table
    Table,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
        }
    }
}

/// One ranked candidate with the fields a reviewer needs to follow up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportedMatch {
    /// 1-based position in the ranking
    pub rank: usize,
    pub name: String,
    pub category: String,
    pub location: String,
    #[serde(flatten)]
    pub matched: ExplainedMatch,
}

/// Ranked matches for a single query item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub query_id: ItemId,
    pub query_kind: ItemKind,
    pub query_name: String,
    /// Number of active opposite-kind items considered
    pub pool_size: usize,
    pub config: MatchConfig,
    pub matches: Vec<ReportedMatch>,
}

impl MatchReport {
    /// Assemble a report, resolving candidate ids against `pool`.
    #[must_use]
    pub fn new(query: &Item, pool: &[Item], config: MatchConfig, matches: Vec<ExplainedMatch>) -> Self {
        let matches = matches
            .into_iter()
            .enumerate()
            .map(|(idx, matched)| {
                let candidate = pool.iter().find(|item| item.id == matched.candidate.candidate_id);
                ReportedMatch {
                    rank: idx + 1,
                    name: candidate.map(|c| c.name.clone()).unwrap_or_default(),
                    category: candidate.map(|c| c.category.clone()).unwrap_or_default(),
                    location: candidate
                        .map(|c| c.match_location().to_string())
                        .unwrap_or_default(),
                    matched,
                }
            })
            .collect();

        Self {
            query_id: query.id,
            query_kind: query.kind(),
            query_name: query.name.clone(),
            pool_size: pool.len(),
            config,
            matches,
        }
    }

    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}
