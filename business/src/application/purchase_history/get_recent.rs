use std::sync::Arc;

use crate::domain::purchase_history::stats::{PurchaseDay, group_by_day};
use crate::domain::purchase_history::use_cases::get_recent::GetRecentPurchasesUseCase;
use crate::domain::shopping_list::store::ShoppingListStore;

pub struct GetRecentPurchasesUseCaseImpl {
    pub store: Arc<ShoppingListStore>,
}

impl GetRecentPurchasesUseCase for GetRecentPurchasesUseCaseImpl {
    fn execute(&self) -> Vec<PurchaseDay> {
        group_by_day(&self.store.history())
    }
}
