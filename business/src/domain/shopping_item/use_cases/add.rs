use async_trait::async_trait;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct AddShoppingItemParams {
    pub name: String,
    pub quantity: u32,
    pub category: Option<String>,
}

#[async_trait]
pub trait AddShoppingItemUseCase: Send + Sync {
    async fn execute(&self, params: AddShoppingItemParams)
    -> Result<ShoppingItem, ShoppingItemError>;
}
