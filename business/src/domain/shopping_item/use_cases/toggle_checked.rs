use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_item::errors::ShoppingItemError;

pub struct ToggleCheckedParams {
    pub id: Uuid,
    pub checked: bool,
}

#[async_trait]
pub trait ToggleCheckedUseCase: Send + Sync {
    async fn execute(&self, params: ToggleCheckedParams) -> Result<(), ShoppingItemError>;
}
