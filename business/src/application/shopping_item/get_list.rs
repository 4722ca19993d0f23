use std::sync::Arc;

use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::use_cases::get_list::{GetShoppingListUseCase, ShoppingListView};
use crate::domain::shopping_list::store::ShoppingListStore;

pub struct GetShoppingListUseCaseImpl {
    pub store: Arc<ShoppingListStore>,
}

impl GetShoppingListUseCase for GetShoppingListUseCaseImpl {
    fn execute(&self) -> ShoppingListView {
        let (checked, unchecked): (Vec<ShoppingItem>, Vec<ShoppingItem>) = self
            .store
            .items()
            .into_iter()
            .partition(|item| item.checked);
        ShoppingListView { unchecked, checked }
    }
}
