use poem_openapi::Object;

use business::domain::category::category_info;
use business::domain::suggestion::model::{ItemSuggestion, RankedTopItem};

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    pub name: String,
    pub category: String,
    pub category_emoji: String,
}

impl From<ItemSuggestion> for SuggestionResponse {
    fn from(suggestion: ItemSuggestion) -> Self {
        Self {
            category_emoji: category_info(&suggestion.category).emoji.to_string(),
            name: suggestion.name,
            category: suggestion.category,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TopItemResponse {
    /// 1-based position
    pub rank: u32,
    pub item_name: String,
    /// Times the item was purchased
    pub count: i64,
    /// True for the first three ranks
    pub podium: bool,
}

impl From<RankedTopItem> for TopItemResponse {
    fn from(item: RankedTopItem) -> Self {
        Self {
            rank: item.rank as u32,
            item_name: item.item_name,
            count: item.count,
            podium: item.podium,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct QuickAddRequest {
    pub item_name: String,
}
