//! Item repository boundary.
//!
//! The matching engine never owns a persistence handle. Callers supply
//! snapshots through [`ItemRepository`]; this module ships an in-memory
//! implementation and a JSON snapshot format to populate it.

use crate::error::{ErrorContext, MatcherError, Result, SnapshotErrorKind};
use crate::model::{Item, ItemId, ItemKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source of item snapshots.
pub trait ItemRepository: Send + Sync {
    /// All active items of `kind`, in a stable order.
    fn fetch_active_items(&self, kind: ItemKind) -> Result<Vec<Item>>;

    /// Look up a single item regardless of status.
    fn get_item(&self, kind: ItemKind, id: ItemId) -> Result<Option<Item>>;
}

/// Repository backed by insertion-ordered maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    lost: IndexMap<ItemId, Item>,
    found: IndexMap<ItemId, Item>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item, returning the previous record with the same id.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items_mut(item.kind()).insert(item.id, item)
    }

    #[must_use]
    pub fn len(&self, kind: ItemKind) -> usize {
        self.items(kind).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lost.is_empty() && self.found.is_empty()
    }

    fn items(&self, kind: ItemKind) -> &IndexMap<ItemId, Item> {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    fn items_mut(&mut self, kind: ItemKind) -> &mut IndexMap<ItemId, Item> {
        match kind {
            ItemKind::Lost => &mut self.lost,
            ItemKind::Found => &mut self.found,
        }
    }
}

impl ItemRepository for InMemoryRepository {
    fn fetch_active_items(&self, kind: ItemKind) -> Result<Vec<Item>> {
        Ok(self
            .items(kind)
            .values()
            .filter(|item| item.is_active())
            .cloned()
            .collect())
    }

    fn get_item(&self, kind: ItemKind, id: ItemId) -> Result<Option<Item>> {
        Ok(self.items(kind).get(&id).cloned())
    }
}

/// Serialized collection of lost and found items.
///
/// ```json
/// {
///   "lost_items": [{ "id": 1, "kind": "lost", "category": "Keys", "name": "car keys", "location": "Lot B" }],
///   "found_items": [{ "id": 7, "kind": "found", "category": "Keys", "name": "keyring", "found_location": "Lot B" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSnapshot {
    pub lost_items: Vec<Item>,
    pub found_items: Vec<Item>,
}

impl ItemSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MatcherError::io(path, e))?;
        Self::from_json(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Build a repository, rejecting misfiled items and duplicate ids.
    pub fn into_repository(self) -> Result<InMemoryRepository> {
        let mut repo = InMemoryRepository::new();
        for (expected, items) in [
            (ItemKind::Lost, self.lost_items),
            (ItemKind::Found, self.found_items),
        ] {
            for item in items {
                if item.kind() != expected {
                    return Err(MatcherError::snapshot(
                        format!("{expected}_items"),
                        SnapshotErrorKind::KindMismatch {
                            id: item.id.0,
                            expected: expected.to_string(),
                            actual: item.kind().to_string(),
                        },
                    ));
                }
                let id = item.id;
                if repo.insert(item).is_some() {
                    return Err(MatcherError::snapshot(
                        format!("{expected}_items"),
                        SnapshotErrorKind::DuplicateId {
                            kind: expected.to_string(),
                            id: id.0,
                        },
                    ));
                }
            }
        }

        tracing::debug!(
            lost = repo.len(ItemKind::Lost),
            found = repo.len(ItemKind::Found),
            "loaded item snapshot"
        );
        Ok(repo)
    }
}
