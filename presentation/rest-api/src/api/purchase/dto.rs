use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::category::category_info;
use business::domain::purchase_history::model::PurchaseHistoryEntry;
use business::domain::purchase_history::stats::{PurchaseDay, WeeklyStats};

#[derive(Debug, Clone, Object)]
pub struct PurchaseResponse {
    pub id: String,
    pub item_name: String,
    pub quantity: u32,
    pub category: String,
    pub category_emoji: String,
    pub purchased_at: DateTime<Utc>,
}

impl From<PurchaseHistoryEntry> for PurchaseResponse {
    fn from(entry: PurchaseHistoryEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            item_name: entry.item_name,
            quantity: entry.quantity,
            category_emoji: category_info(&entry.category).emoji.to_string(),
            category: entry.category,
            purchased_at: entry.purchased_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PurchaseDayResponse {
    pub day: NaiveDate,
    pub purchases: Vec<PurchaseResponse>,
}

impl From<PurchaseDay> for PurchaseDayResponse {
    fn from(day: PurchaseDay) -> Self {
        Self {
            day: day.day,
            purchases: day.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WeeklyStatsResponse {
    /// Purchases recorded since Monday 00:00 UTC
    pub items_purchased: u32,
    pub total_units: u64,
    #[oai(skip_serializing_if_is_none)]
    pub top_category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub top_item: Option<String>,
}

impl From<WeeklyStats> for WeeklyStatsResponse {
    fn from(stats: WeeklyStats) -> Self {
        Self {
            items_purchased: stats.items_purchased as u32,
            total_units: stats.total_units,
            top_category: stats.top_category,
            top_item: stats.top_item,
        }
    }
}
