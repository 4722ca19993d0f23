use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::is_known_category;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::{ShoppingItem, ShoppingItemDraft};
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::add::{AddShoppingItemParams, AddShoppingItemUseCase};
use crate::domain::shopping_list::store::ShoppingListStore;

pub struct AddShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub store: Arc<ShoppingListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddShoppingItemUseCase for AddShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        let draft =
            ShoppingItemDraft::new(&params.name, params.quantity, params.category.as_deref())?;

        self.logger
            .info(&format!("Adding shopping item: {}", draft.name));
        if !is_known_category(&draft.category) {
            self.logger.debug(&format!(
                "Category {} is not in the registry, stored as given",
                draft.category
            ));
        }

        // The snapshot only ever holds records the backend accepted.
        let item = match self.repository.insert(&draft).await {
            Ok(item) => item,
            Err(err) => {
                self.logger
                    .error(&format!("Shopping item {} rejected: {}", draft.name, err));
                return Err(err.into());
            }
        };
        self.store.insert_item(item.clone());

        self.logger
            .info(&format!("Shopping item added: {}", item.id));
        Ok(item)
    }
}
