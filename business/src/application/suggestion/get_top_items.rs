use std::sync::Arc;

use crate::domain::shopping_list::store::ShoppingListStore;
use crate::domain::suggestion::aggregator::top_items_view;
use crate::domain::suggestion::model::RankedTopItem;
use crate::domain::suggestion::use_cases::get_top_items::GetTopItemsUseCase;

pub struct GetTopItemsUseCaseImpl {
    pub store: Arc<ShoppingListStore>,
}

impl GetTopItemsUseCase for GetTopItemsUseCaseImpl {
    fn execute(&self) -> Vec<RankedTopItem> {
        top_items_view(&self.store.top_items())
    }
}
