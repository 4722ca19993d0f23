use async_trait::async_trait;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct QuickAddParams {
    pub item_name: String,
}

/// Re-adds a frequently bought item with quantity 1 and the default category.
#[async_trait]
pub trait QuickAddUseCase: Send + Sync {
    async fn execute(&self, params: QuickAddParams) -> Result<ShoppingItem, ShoppingItemError>;
}
