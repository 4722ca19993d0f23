use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::DEFAULT_CATEGORY;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::{DEFAULT_QUANTITY, ShoppingItem};
use crate::domain::shopping_item::use_cases::add::{AddShoppingItemParams, AddShoppingItemUseCase};
use crate::domain::shopping_item::use_cases::quick_add::{QuickAddParams, QuickAddUseCase};

pub struct QuickAddUseCaseImpl {
    pub add_use_case: Arc<dyn AddShoppingItemUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl QuickAddUseCase for QuickAddUseCaseImpl {
    async fn execute(&self, params: QuickAddParams) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .debug(&format!("Quick-adding top item: {}", params.item_name));

        self.add_use_case
            .execute(AddShoppingItemParams {
                name: params.item_name,
                quantity: DEFAULT_QUANTITY,
                category: Some(DEFAULT_CATEGORY.to_string()),
            })
            .await
    }
}
