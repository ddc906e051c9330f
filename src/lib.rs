//! **Lexical matching engine for lost and found item reports.**
//!
//! `lostfound-matcher` ranks reports of the opposite kind against a query
//! report: a lost item is matched against found items, and vice versa. Each
//! candidate receives a confidence score on a 0-100 scale that combines three
//! signals:
//!
//! - **Description** (60%): TF-IDF cosine similarity over unigrams and bigrams
//!   of a normalized feature text built from category, name, description and color.
//! - **Category** (25%): case-insensitive exact match.
//! - **Location** (15%): tiered lexical similarity (equal, containment, word overlap).
//!
//! Candidates at or above a threshold are sorted by descending confidence
//! (ties keep pool order) and truncated to the top N. Every result can be
//! turned into a human-readable verdict with reasons.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: item records ([`Item`]) and scored results ([`MatchCandidate`]).
//! - **[`matching`]**: the scoring engine, [`find_matches`] and the [`ItemMatcher`] trait.
//! - **[`repository`]**: the [`ItemRepository`] boundary and a JSON snapshot loader.
//! - **[`pipeline`]**: repository → match → report orchestration.
//! - **[`reports`]**: JSON, summary and table renderers.
//! - **[`config`]**: YAML configuration with presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use lostfound_matcher::{find_matches, Item};
//!
//! let lost = Item::lost(1, "Electronics", "Phone", "Student Center")
//!     .with_description("black phone with cracked screen")
//!     .with_color("Black");
//! let pool = vec![
//!     Item::found(20, "Electronics", "Phone", "Student Center, Room 101")
//!         .with_description("black phone, screen cracked")
//!         .with_color("black"),
//!     Item::found(21, "Clothing", "Scarf", "Gym"),
//! ];
//!
//! let matches = find_matches(&lost, &pool, 3, 40.0);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].candidate_id.0, 20);
//! assert!(matches[0].confidence > 40.0);
//! ```
//!
//! ## Matching From a Snapshot
//!
//! ```no_run
//! use std::path::Path;
//! use lostfound_matcher::{match_report, ItemId, ItemKind, ItemSnapshot, MatchConfig, TfidfMatcher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = ItemSnapshot::from_path(Path::new("items.json"))?.into_repository()?;
//!     let matcher = TfidfMatcher::new(MatchConfig::strict());
//!
//!     if let Some(report) = match_report(&repo, &matcher, ItemKind::Lost, ItemId(1))? {
//!         for m in &report.matches {
//!             println!("{} {:.1}% {}", m.rank, m.matched.candidate.confidence, m.matched.explanation);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `lostfound-matcher` binary exposes `match`, `match-all`, `explain`,
//! `config` and `completions` subcommands on top of this library.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Counts and scores are converted between usize and f64 in the vectorizer
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod repository;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, MatchingConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, MatcherError, Result};
pub use matching::{
    explain, find_matches, ExplainedMatch, ItemMatcher, MatchConfig, MatchExplanation,
    MatchReason, TfidfMatcher, Verdict,
};
pub use model::{Contact, Item, ItemDetails, ItemId, ItemKind, ItemStatus, MatchCandidate};
pub use pipeline::{match_all, match_report};
pub use reports::{MatchReport, ReportFormat, ReportGenerator};
pub use repository::{InMemoryRepository, ItemRepository, ItemSnapshot};
