//! Repository-backed matching stage.

use crate::error::{ErrorContext, Result};
use crate::matching::ItemMatcher;
use crate::model::{ItemId, ItemKind};
use crate::reports::MatchReport;
use crate::repository::ItemRepository;
use rayon::prelude::*;

/// Match one stored item against the active items of the opposite kind.
///
/// Returns `Ok(None)` when no item of `kind` has the given id.
pub fn match_report(
    repo: &dyn ItemRepository,
    matcher: &dyn ItemMatcher,
    kind: ItemKind,
    id: ItemId,
) -> Result<Option<MatchReport>> {
    let Some(query) = repo
        .get_item(kind, id)
        .with_context(|| format!("looking up {kind} item {id}"))?
    else {
        tracing::debug!("No {kind} item with id {id}");
        return Ok(None);
    };

    let pool = repo
        .fetch_active_items(kind.opposite())
        .with_context(|| format!("fetching active {} items", kind.opposite()))?;

    tracing::debug!(
        matcher = matcher.name(),
        query = %id,
        pool = pool.len(),
        "matching item"
    );

    let matches = matcher.find_explained_matches(&query, &pool);
    Ok(Some(MatchReport::new(&query, &pool, matcher.config(), matches)))
}

/// Match every active item of `kind` against the opposite pool.
///
/// Each query is scored independently; reports keep repository order.
pub fn match_all(
    repo: &dyn ItemRepository,
    matcher: &dyn ItemMatcher,
    kind: ItemKind,
) -> Result<Vec<MatchReport>> {
    let queries = repo
        .fetch_active_items(kind)
        .with_context(|| format!("fetching active {kind} items"))?;
    let pool = repo
        .fetch_active_items(kind.opposite())
        .with_context(|| format!("fetching active {} items", kind.opposite()))?;

    tracing::info!(
        "Matching {} {kind} items against {} {} items",
        queries.len(),
        pool.len(),
        kind.opposite()
    );

    let config = matcher.config();
    let reports = queries
        .par_iter()
        .map(|query| MatchReport::new(query, &pool, config, matcher.find_explained_matches(query, &pool)))
        .collect();

    Ok(reports)
}
