use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shopping_item::model::ShoppingItem;

/// An immutable ledger row. Name and category are copied from the item at
/// validation time, never referenced.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseHistoryEntry {
    pub id: Uuid,
    pub item_name: String,
    pub quantity: u32,
    pub category: String,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseHistoryEntry {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        item_name: String,
        quantity: u32,
        category: String,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_name,
            quantity,
            category,
            purchased_at,
        }
    }
}

/// History shape of a checked item, before the backend stamps id and time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchaseEntry {
    pub item_name: String,
    pub quantity: u32,
    pub category: String,
}

impl From<&ShoppingItem> for NewPurchaseEntry {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            item_name: item.name.clone(),
            quantity: item.quantity,
            category: item.category.clone(),
        }
    }
}

/// Backend-computed purchase frequency of one item name.
#[derive(Debug, Clone, PartialEq)]
pub struct TopItemStat {
    pub item_name: String,
    pub count: i64,
}
