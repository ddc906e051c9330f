//! Match command handlers.
//!
//! Implements the `match` and `match-all` subcommands over a JSON snapshot.

use super::ensure_valid;
use crate::config::AppConfig;
use crate::matching::TfidfMatcher;
use crate::model::{ItemId, ItemKind};
use crate::pipeline::{
    auto_detect_format, exit_codes, match_all, match_report, should_use_color, write_output,
    OutputTarget,
};
use crate::reports::{create_reporter, MatchReport};
use crate::repository::{InMemoryRepository, ItemSnapshot};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the `match` command for a single stored item.
pub fn run_match(snapshot: &Path, kind: ItemKind, id: ItemId, config: &AppConfig) -> Result<i32> {
    ensure_valid(config)?;
    let repo = load_repository(snapshot)?;
    let matcher = TfidfMatcher::new(config.match_config());

    let report = match_report(&repo, &matcher, kind, id)?
        .with_context(|| format!("no {kind} item with id {} in {}", id.0, snapshot.display()))?;

    if !config.behavior.quiet {
        tracing::info!(
            "{} of {} {} items matched {kind} item {id}",
            report.matches.len(),
            report.pool_size,
            kind.opposite()
        );
    }

    emit(std::slice::from_ref(&report), config)
}

/// Run the `match-all` command for every active item of `kind`.
pub fn run_match_all(snapshot: &Path, kind: ItemKind, config: &AppConfig) -> Result<i32> {
    ensure_valid(config)?;
    let repo = load_repository(snapshot)?;
    let matcher = TfidfMatcher::new(config.match_config());

    let reports = match_all(&repo, &matcher, kind)?;
    emit(&reports, config)
}

fn load_repository(snapshot: &Path) -> Result<InMemoryRepository> {
    ItemSnapshot::from_path(snapshot)
        .and_then(ItemSnapshot::into_repository)
        .with_context(|| format!("failed to load snapshot {}", snapshot.display()))
}

/// Render, write and translate the reports into an exit code.
fn emit(reports: &[MatchReport], config: &AppConfig) -> Result<i32> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let colored = should_use_color(config.output.no_color, &target);

    let rendered = create_reporter(format, colored)
        .generate(reports)
        .context("failed to render report")?;
    write_output(&rendered, &target, config.behavior.quiet)?;

    let any_matches = reports.iter().any(MatchReport::has_matches);
    if any_matches || config.behavior.allow_empty {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::NO_MATCHES)
    }
}
