use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::purchase_history::model::{PurchaseHistoryEntry, TopItemStat};

#[derive(Debug, FromRow)]
pub struct PurchaseHistoryEntity {
    pub id: Uuid,
    pub item_name: String,
    pub quantity: i32,
    pub category: String,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseHistoryEntity {
    pub fn into_domain(self) -> PurchaseHistoryEntry {
        PurchaseHistoryEntry::from_repository(
            self.id,
            self.item_name,
            self.quantity.max(1) as u32,
            self.category,
            self.purchased_at,
        )
    }
}

/// Row returned by the `get_top_items` SQL function.
#[derive(Debug, FromRow)]
pub struct TopItemEntity {
    pub item_name: String,
    pub purchase_count: i64,
}

impl TopItemEntity {
    pub fn into_domain(self) -> TopItemStat {
        TopItemStat {
            item_name: self.item_name,
            count: self.purchase_count,
        }
    }
}
