use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::category_info;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::use_cases::get_list::ShoppingListView;

#[derive(Debug, Clone, Object)]
pub struct AddShoppingItemRequest {
    /// Item name (cannot be blank)
    pub name: String,
    /// Defaults to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    /// Defaults to "Other"
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ToggleCheckedRequest {
    pub checked: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Category as stored, possibly outside the known registry
    pub category: String,
    /// Emoji of the category, or of "Other" when unknown
    pub category_emoji: String,
    pub category_color: String,
    pub checked: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        let info = category_info(&item.category);
        Self {
            id: item.id.to_string(),
            name: item.name,
            quantity: item.quantity,
            category_emoji: info.emoji.to_string(),
            category_color: info.color.to_string(),
            category: item.category,
            checked: item.checked,
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    pub unchecked: Vec<ShoppingItemResponse>,
    pub checked: Vec<ShoppingItemResponse>,
    pub total: u32,
}

impl From<ShoppingListView> for ShoppingListResponse {
    fn from(view: ShoppingListView) -> Self {
        let total = view.total() as u32;
        Self {
            unchecked: view.unchecked.into_iter().map(Into::into).collect(),
            checked: view.checked.into_iter().map(Into::into).collect(),
            total,
        }
    }
}
