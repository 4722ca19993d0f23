use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItemChanges;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::toggle_checked::{
    ToggleCheckedParams, ToggleCheckedUseCase,
};
use crate::domain::shopping_list::settings::RollbackPolicy;
use crate::domain::shopping_list::store::ShoppingListStore;

pub struct ToggleCheckedUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub store: Arc<ShoppingListStore>,
    pub rollback_policy: RollbackPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleCheckedUseCase for ToggleCheckedUseCaseImpl {
    async fn execute(&self, params: ToggleCheckedParams) -> Result<(), ShoppingItemError> {
        self.logger.debug(&format!(
            "Setting shopping item {} checked={}",
            params.id, params.checked
        ));

        let change = self
            .store
            .set_checked(params.id, params.checked)
            .ok_or(ShoppingItemError::NotFound)?;

        let changes = ShoppingItemChanges::checked(params.checked);
        if let Err(err) = self.repository.update(params.id, &changes).await {
            self.logger.warn(&format!(
                "Shopping item {} check state not saved: {}",
                params.id, err
            ));
            if self.rollback_policy == RollbackPolicy::Revert
                && !self.store.revert_checked(params.id, change)
            {
                self.logger.debug(&format!(
                    "Shopping item {} changed again since, rollback skipped",
                    params.id
                ));
            }
            return Err(ShoppingItemError::from_repository(err));
        }

        Ok(())
    }
}
