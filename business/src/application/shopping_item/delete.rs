use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};
use crate::domain::shopping_list::settings::RollbackPolicy;
use crate::domain::shopping_list::store::ShoppingListStore;

pub struct DeleteShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub store: Arc<ShoppingListStore>,
    pub rollback_policy: RollbackPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingItemUseCase for DeleteShoppingItemUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingItemParams) -> Result<(), ShoppingItemError> {
        self.logger
            .info(&format!("Deleting shopping item: {}", params.id));

        let (index, removed) = self
            .store
            .remove_item(params.id)
            .ok_or(ShoppingItemError::NotFound)?;

        if let Err(err) = self.repository.delete(params.id).await {
            self.logger.warn(&format!(
                "Shopping item {} not deleted remotely: {}",
                params.id, err
            ));
            // NotFound means the row is already gone remotely, so nothing to restore.
            if self.rollback_policy == RollbackPolicy::Revert && err != RepositoryError::NotFound {
                self.store.restore_item(index, removed);
            }
            return Err(ShoppingItemError::from_repository(err));
        }

        self.logger
            .info(&format!("Shopping item deleted: {}", params.id));
        Ok(())
    }
}
