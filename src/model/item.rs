//! Lost and found item records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier of an item within its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Whether a report describes something lost or something found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    /// The kind a report of this kind is matched against.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Lost => Self::Found,
            Self::Found => Self::Lost,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            other => Err(format!("unknown item kind '{other}' (expected lost or found)")),
        }
    }
}

/// Lifecycle status of an item report.
///
/// Only [`ItemStatus::Active`] items take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    /// Paired with a report of the opposite kind, awaiting verification
    Matched,
    /// Returned to its owner
    Recovered,
    /// Withdrawn by the reporter
    Closed,
}

impl ItemStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Contact details of the person who filed a report.
///
/// Opaque to the matching engine. Any field may be missing from a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Where an item was lost or found, depending on its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemDetails {
    Lost {
        /// Place where the owner believes the item was lost
        location: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lost_date: Option<NaiveDate>,
    },
    Found {
        /// Place where the item was picked up
        found_location: String,
        /// Place where the item is being held now
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_location: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        found_date: Option<NaiveDate>,
    },
}

/// A single lost or found item report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub details: ItemDetails,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Create an active lost-item report.
    pub fn lost(
        id: u64,
        category: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::with_details(
            ItemId(id),
            category.into(),
            name.into(),
            ItemDetails::Lost {
                location: location.into(),
                lost_date: None,
            },
        )
    }

    /// Create an active found-item report.
    pub fn found(
        id: u64,
        category: impl Into<String>,
        name: impl Into<String>,
        found_location: impl Into<String>,
    ) -> Self {
        Self::with_details(
            ItemId(id),
            category.into(),
            name.into(),
            ItemDetails::Found {
                found_location: found_location.into(),
                current_location: None,
                found_date: None,
            },
        )
    }

    fn with_details(id: ItemId, category: String, name: String, details: ItemDetails) -> Self {
        Self {
            id,
            category,
            name,
            description: String::new(),
            color: None,
            details,
            contact: Contact::default(),
            status: ItemStatus::Active,
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self.details {
            ItemDetails::Lost { .. } => ItemKind::Lost,
            ItemDetails::Found { .. } => ItemKind::Found,
        }
    }

    /// The location compared during matching: the lost location of a lost
    /// item, the pickup location of a found item.
    #[must_use]
    pub fn match_location(&self) -> &str {
        match &self.details {
            ItemDetails::Lost { location, .. } => location,
            ItemDetails::Found { found_location, .. } => found_location,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_opposite() {
        assert_eq!(ItemKind::Lost.opposite(), ItemKind::Found);
        assert_eq!(ItemKind::Found.opposite(), ItemKind::Lost);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("LOST".parse::<ItemKind>(), Ok(ItemKind::Lost));
        assert_eq!(" found ".parse::<ItemKind>(), Ok(ItemKind::Found));
        assert!("misplaced".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_match_location_per_kind() {
        let lost = Item::lost(1, "Keys", "car keys", "Parking Lot B");
        assert_eq!(lost.match_location(), "Parking Lot B");

        let mut found = Item::found(2, "Keys", "keyring", "Parking Lot B");
        if let ItemDetails::Found {
            current_location, ..
        } = &mut found.details
        {
            *current_location = Some("Security Office".to_string());
        }
        assert_eq!(found.match_location(), "Parking Lot B");
        assert_eq!(found.kind(), ItemKind::Found);
    }

    #[test]
    fn test_item_deserializes_with_defaults() {
        let json = r#"{
            "id": 7,
            "category": "Electronics",
            "name": "phone",
            "kind": "found",
            "found_location": "Cafeteria"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.kind(), ItemKind::Found);
        assert!(item.description.is_empty());
        assert!(item.color.is_none());
        assert!(item.is_active());
    }

    #[test]
    fn test_partial_contact_deserializes() {
        let json = r#"{
            "id": 1,
            "category": "Accessories",
            "name": "Wallet",
            "kind": "lost",
            "location": "Main Library",
            "contact": { "name": "A. Rivera", "email": "arivera@example.edu" }
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.contact.name, "A. Rivera");
        assert!(item.contact.phone.is_empty());
        assert_eq!(item.contact.email.as_deref(), Some("arivera@example.edu"));

        let empty: Contact = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Contact::default());
    }

    #[test]
    fn test_status_roundtrip_lowercase() {
        let json = serde_json::to_string(&ItemStatus::Recovered).unwrap();
        assert_eq!(json, "\"recovered\"");
    }
}
